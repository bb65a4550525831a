use orfscan_core::mode::ModeParams;
use orfscan_core::scan::ScanReport;

/// Render the analysis report: a promoter section when the mode has a
/// promoter, then the ORF listing.
pub fn render(report: &ScanReport, params: &ModeParams) -> String {
    let mut out = String::new();

    out.push_str("=======================================\n");
    out.push_str("          ANALYSIS COMPLETE\n");
    out.push_str("=======================================\n\n");

    if let Some(promoter) = params.promoter {
        out.push_str(&format!("--- {} Results ---\n", promoter.name));
        if report.promoter_sites.is_empty() {
            out.push_str(&format!(
                "No potential {} sequences found.\n",
                promoter.name
            ));
        } else {
            out.push_str(&format!(
                "Found {} potential {}(s) at index:\n",
                report.promoter_sites.len(),
                promoter.name
            ));
            for site in &report.promoter_sites {
                out.push_str(&format!("  > {site}\n"));
            }
        }
        out.push('\n');
    }

    out.push_str("--- ORF Results ---\n");
    if report.orfs.is_empty() {
        out.push_str("No complete ORFs found.\n");
    } else {
        out.push_str(&format!("Found {} potential ORF(s):\n\n", report.orfs.len()));
        for orf in &report.orfs {
            out.push_str("----------------------------------------\n");
            out.push_str(&format!("  Start Index: {}\n", orf.start_index));
            out.push_str(&format!("  Stop Index:  {}\n", orf.stop_index));
            out.push_str(&format!("  Length: {} bp\n", orf.len()));
            out.push_str(&format!(
                "  Sequence: {}\n",
                String::from_utf8_lossy(&orf.bases)
            ));
            out.push_str("----------------------------------------\n\n");
        }
    }

    out
}
