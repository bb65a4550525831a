use crate::alphabets::dna;
use crate::error::{ScanError, ScanResult};
use crate::seq::traits::SeqBytes;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> ScanResult<Self> {
        let alphabet = dna::alphabet();
        for (pos, &b) in bytes.iter().enumerate() {
            if !alphabet.contains(b) {
                return Err(ScanError::InvalidChar { ch: b as char, pos });
            }
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        DnaSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> ScanResult<Self> {
        DnaSeq::new(bytes)
    }

    fn into_bytes(self) -> Vec<u8> {
        DnaSeq::into_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_bases() {
        let s = DnaSeq::new(b"ACGTacgt".to_vec()).unwrap();
        assert_eq!(s.as_bytes(), b"ACGTacgt");
        assert_eq!(s.len(), 8);
    }

    #[test]
    fn rejects_uracil() {
        let err = DnaSeq::new(b"ACGU".to_vec()).unwrap_err();
        match err {
            ScanError::InvalidChar { ch, pos } => {
                assert_eq!(ch, 'U');
                assert_eq!(pos, 3);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_first_bad_position() {
        let err = DnaSeq::new(b"AC#G#".to_vec()).unwrap_err();
        match err {
            ScanError::InvalidChar { ch, pos } => {
                assert_eq!(ch, '#');
                assert_eq!(pos, 2);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn empty_is_valid_here() {
        // emptiness is rejected by the loader, not the type
        let s = DnaSeq::new(Vec::new()).unwrap();
        assert!(s.is_empty());
    }
}
