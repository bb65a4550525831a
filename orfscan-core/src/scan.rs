use crate::mode::{ModeParams, CODON_LEN};

use memchr::memmem;

/// A start-codon-to-stop-codon span in a single reading frame.
/// `stop_index` points at the first base of the stop codon; `bases` runs
/// from the start codon through the end of the stop codon inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenReadingFrame {
    pub start_index: usize,
    pub stop_index: usize,
    pub bases: Vec<u8>,
}

impl OpenReadingFrame {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub promoter_sites: Vec<usize>,
    pub orfs: Vec<OpenReadingFrame>,
}

/// Every offset where `pattern` occurs in `seq`, ascending. Overlapping
/// occurrences are all reported; an empty pattern yields no sites.
pub fn find_motif(seq: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(pattern);
    let mut sites = Vec::new();
    let mut i = 0usize;

    while i <= seq.len().saturating_sub(pattern.len()) {
        match finder.find(&seq[i..]) {
            Some(pos) => {
                sites.push(i + pos);
                // overlap: advance by 1 past the start of the match
                i += pos + 1;
            }
            None => break,
        }
    }

    sites
}

/// All ORFs in the start codon's reading frames, in ascending start order.
///
/// Each start codon opens its own in-frame walk; the first stop codon at a
/// multiple-of-3 offset from the start closes the frame. Starts with no
/// in-frame stop before the sequence end are dropped. Starts inside an
/// already-closed span are not skipped, so output spans may overlap.
pub fn find_orfs(
    seq: &[u8],
    start_codon: &[u8; CODON_LEN],
    stop_codons: &[[u8; CODON_LEN]],
) -> Vec<OpenReadingFrame> {
    let mut orfs = Vec::new();

    for i in find_motif(seq, start_codon) {
        let mut j = i + CODON_LEN;
        while j + CODON_LEN <= seq.len() {
            let codon = &seq[j..j + CODON_LEN];
            if stop_codons.iter().any(|stop| codon == stop.as_slice()) {
                orfs.push(OpenReadingFrame {
                    start_index: i,
                    stop_index: j,
                    bases: seq[i..j + CODON_LEN].to_vec(),
                });
                break;
            }
            j += CODON_LEN;
        }
    }

    orfs
}

/// One full pass over a cleaned, uppercased sequence: promoter sites (when
/// the mode has a promoter) plus ORFs.
pub fn scan(seq: &[u8], params: &ModeParams) -> ScanReport {
    let promoter_sites = match params.promoter {
        Some(promoter) => find_motif(seq, promoter.pattern),
        None => Vec::new(),
    };
    let orfs = find_orfs(seq, &params.start_codon, params.stop_codons);

    ScanReport {
        promoter_sites,
        orfs,
    }
}
