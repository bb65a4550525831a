pub mod dna;
pub mod rna;
pub mod traits;

pub use dna::DnaSeq;
pub use rna::RnaSeq;
pub use traits::SeqBytes;
