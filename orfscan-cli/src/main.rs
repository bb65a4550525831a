mod cli;
mod report;

use clap::Parser;
use log::{error, info};
use simple_logger::init_with_level;

use orfscan_core::error::ScanResult;
use orfscan_core::io::{read_sequence_from_path, read_sequence_from_reader};
use orfscan_core::mode::Mode;
use orfscan_core::scan;
use orfscan_core::seq::{DnaSeq, RnaSeq};

use std::path::Path;

fn main() {
    let args = cli::Args::parse();

    init_with_level(args.level).unwrap();

    if let Err(err) = run(args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: cli::Args) -> ScanResult<()> {
    let mode = Mode::from(args.mode);
    let params = mode.params();
    info!("mode: {}", mode.label());

    let bases = load_sequence(mode, args.input.as_deref())?;
    info!("sequence loaded ({} bp), running analysis", bases.len());

    let result = scan::scan(&bases, &params);
    print!("{}", report::render(&result, &params));

    Ok(())
}

fn load_sequence(mode: Mode, path: Option<&Path>) -> ScanResult<Vec<u8>> {
    match (mode, path) {
        (Mode::Rna, Some(path)) => Ok(read_sequence_from_path::<RnaSeq>(path)?.into_bytes()),
        (Mode::Rna, None) => {
            Ok(read_sequence_from_reader::<_, RnaSeq>(std::io::stdin().lock())?.into_bytes())
        }
        (_, Some(path)) => Ok(read_sequence_from_path::<DnaSeq>(path)?.into_bytes()),
        (_, None) => Ok(read_sequence_from_reader::<_, DnaSeq>(std::io::stdin().lock())?.into_bytes()),
    }
}
