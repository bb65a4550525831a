use crate::alphabets::rna;
use crate::error::{ScanError, ScanResult};
use crate::seq::traits::SeqBytes;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    bytes: Vec<u8>,
}

impl RnaSeq {
    pub fn new(bytes: Vec<u8>) -> ScanResult<Self> {
        let alphabet = rna::alphabet();
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

impl SeqBytes for RnaSeq {
    fn as_bytes(&self) -> &[u8] {
        RnaSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> ScanResult<Self> {
        RnaSeq::new(bytes)
    }

    fn into_bytes(self) -> Vec<u8> {
        RnaSeq::into_bytes(self)
    }
}
