use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use orfscan_core::mode::Mode;

#[derive(Debug, Parser)]
#[command(name = "orfscan", about = "Scan a nucleotide sequence for ORFs and promoter motifs", version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[arg(
        short = 'm',
        long = "mode",
        required = true,
        help = "Sequence type",
        value_name = "MODE",
        value_enum
    )]
    pub mode: ModeArg,

    #[arg(
        help = "Path to a .txt/.fasta file (reads stdin when omitted)",
        value_name = "INPUT"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'L',
        long = "level",
        help = "Logging level",
        value_name = "LEVEL",
        default_value_t = log::Level::Info,
    )]
    pub level: log::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Eukaryotic DNA (TATA box promoter)
    Eukaryotic,
    /// Prokaryotic DNA (Pribnow box promoter)
    Prokaryotic,
    /// RNA (no promoter search)
    Rna,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Eukaryotic => Mode::EukaryoticDna,
            ModeArg::Prokaryotic => Mode::ProkaryoticDna,
            ModeArg::Rna => Mode::Rna,
        }
    }
}
