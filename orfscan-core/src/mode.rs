use crate::alphabets::{self, Alphabet};
use crate::error::ScanError;

/// Codons are fixed three-symbol tokens in both alphabets.
pub const CODON_LEN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    EukaryoticDna,
    ProkaryoticDna,
    Rna,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Promoter {
    pub pattern: &'static [u8],
    pub name: &'static str,
}

/// Alphabet-specific scan parameters, resolved once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeParams {
    pub start_codon: [u8; CODON_LEN],
    pub stop_codons: &'static [[u8; CODON_LEN]],
    /// `None` means no promoter search for this mode (RNA).
    pub promoter: Option<Promoter>,
}

const DNA_STOPS: [[u8; CODON_LEN]; 3] = [*b"TAA", *b"TAG", *b"TGA"];
const RNA_STOPS: [[u8; CODON_LEN]; 3] = [*b"UAA", *b"UAG", *b"UGA"];

const TATA_BOX: Promoter = Promoter {
    pattern: b"TATAAA",
    name: "TATA Box",
};

const PRIBNOW_BOX: Promoter = Promoter {
    pattern: b"TATAAT",
    name: "Pribnow Box",
};

impl Mode {
    pub fn params(self) -> ModeParams {
        match self {
            Mode::EukaryoticDna => ModeParams {
                start_codon: *b"ATG",
                stop_codons: &DNA_STOPS,
                promoter: Some(TATA_BOX),
            },
            Mode::ProkaryoticDna => ModeParams {
                start_codon: *b"ATG",
                stop_codons: &DNA_STOPS,
                promoter: Some(PRIBNOW_BOX),
            },
            Mode::Rna => ModeParams {
                start_codon: *b"AUG",
                stop_codons: &RNA_STOPS,
                promoter: None,
            },
        }
    }

    pub fn alphabet(self) -> Alphabet {
        match self {
            Mode::Rna => alphabets::rna::alphabet(),
            Mode::EukaryoticDna | Mode::ProkaryoticDna => alphabets::dna::alphabet(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::EukaryoticDna => "Eukaryotic DNA",
            Mode::ProkaryoticDna => "Prokaryotic DNA",
            Mode::Rna => "RNA",
        }
    }
}

/// Menu-style numeric tags: 1 eukaryotic, 2 prokaryotic, 3 RNA.
impl TryFrom<u8> for Mode {
    type Error = ScanError;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Mode::EukaryoticDna),
            2 => Ok(Mode::ProkaryoticDna),
            3 => Ok(Mode::Rna),
            other => Err(ScanError::InvalidMode { choice: other }),
        }
    }
}
