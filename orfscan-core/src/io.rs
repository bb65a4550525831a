use crate::error::{ScanError, ScanResult};
use crate::seq::traits::SeqBytes;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Read one cleaned sequence: `>` header lines and blank lines are skipped,
/// whitespace is stripped, everything else is uppercased and concatenated.
/// An input with no bases left after cleaning is an error.
pub fn read_sequence_from_reader<R: BufRead, S: SeqBytes>(mut reader: R) -> ScanResult<S> {
    let mut buf_line = String::new();
    let mut seq_buf = Vec::new();

    loop {
        buf_line.clear();
        match reader.read_line(&mut buf_line) {
            Ok(0) => break,
            Ok(_) => {
                if buf_line.starts_with('>') {
                    continue;
                }
                for b in buf_line.bytes() {
                    if !b.is_ascii_whitespace() {
                        seq_buf.push(b.to_ascii_uppercase());
                    }
                }
            }
            Err(err) => return Err(ScanError::Io(err)),
        }
    }

    if seq_buf.is_empty() {
        return Err(ScanError::EmptySequence);
    }

    S::from_bytes(seq_buf)
}

pub fn read_sequence_from_path<S: SeqBytes>(path: impl AsRef<Path>) -> ScanResult<S> {
    let file = File::open(path)?;
    read_sequence_from_reader(BufReader::new(file))
}

pub fn read_sequence_from_bytes<S: SeqBytes>(data: &[u8]) -> ScanResult<S> {
    read_sequence_from_reader(BufReader::new(Cursor::new(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::DnaSeq;
    use crate::seq::rna::RnaSeq;

    #[test]
    fn skips_headers_and_blank_lines() {
        let data = b">seq1 some desc\nACGT\n\nAC GT\n";
        let seq = read_sequence_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(seq.as_bytes(), b"ACGTACGT");
    }

    #[test]
    fn uppercases_bases() {
        let data = b"acg\ntAC\n";
        let seq = read_sequence_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(seq.as_bytes(), b"ACGTAC");
    }

    #[test]
    fn multiple_headers_concatenate_bodies() {
        // single-sequence tool: every non-header line feeds one sequence
        let data = b">a\nACG\n>b\nTTT\n";
        let seq = read_sequence_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(seq.as_bytes(), b"ACGTTT");
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = read_sequence_from_bytes::<DnaSeq>(b"").unwrap_err();
        assert!(matches!(err, ScanError::EmptySequence));

        let err = read_sequence_from_bytes::<DnaSeq>(b">only a header\n  \n").unwrap_err();
        assert!(matches!(err, ScanError::EmptySequence));
    }

    #[test]
    fn invalid_base_is_reported_with_position() {
        let data = b"ACG\nTXG\n";
        let err = read_sequence_from_bytes::<DnaSeq>(data).unwrap_err();
        match err {
            ScanError::InvalidChar { ch, pos } => {
                assert_eq!(ch, 'X');
                assert_eq!(pos, 4);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn rna_loader_accepts_uracil() {
        let seq = read_sequence_from_bytes::<RnaSeq>(b"aug\nuaa\n").unwrap();
        assert_eq!(seq.as_bytes(), b"AUGUAA");
    }
}
