// Fri Jan 16 2026 - Alex

use once_cell::sync::Lazy;
use std::fmt;

use super::condition::{parse_condition, Condition};
use super::error::EncodeError;

const FIXED_MNEMONICS: [&str; 6] = ["B", "BL", "CBZ", "CBNZ", "TBZ", "TBNZ"];

static VALID_FORMS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut forms: Vec<String> = FIXED_MNEMONICS.iter().map(|m| m.to_string()).collect();

    for cond in Condition::ALL {
        forms.push(format!("B.{}", cond.mnemonic().to_uppercase()));
        if cond.alternate_mnemonic() != cond.mnemonic() {
            forms.push(format!("B.{}", cond.alternate_mnemonic().to_uppercase()));
        }
    }

    forms
});

/// Every textual form the encoder accepts, synonyms included.
pub fn valid_forms() -> &'static [String] {
    &VALID_FORMS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    B,
    BL,
    CBZ,
    CBNZ,
    TBZ,
    TBNZ,
    BCond(Condition),
}

impl Mnemonic {
    pub fn parse(text: &str) -> Result<Self, EncodeError> {
        let upper = text.trim().to_uppercase();

        match upper.as_str() {
            "B" => Ok(Mnemonic::B),
            "BL" => Ok(Mnemonic::BL),
            "CBZ" => Ok(Mnemonic::CBZ),
            "CBNZ" => Ok(Mnemonic::CBNZ),
            "TBZ" => Ok(Mnemonic::TBZ),
            "TBNZ" => Ok(Mnemonic::TBNZ),
            other => {
                if let Some(suffix) = other.strip_prefix("B.") {
                    if let Some(cond) = parse_condition(suffix) {
                        return Ok(Mnemonic::BCond(cond));
                    }
                }

                Err(EncodeError::UnsupportedOpcode {
                    mnemonic: text.trim().to_string(),
                    valid: VALID_FORMS.join(", "),
                })
            }
        }
    }

    /// Fixed high-order opcode-class bits for this family.
    pub fn fixed_bits(self) -> u32 {
        match self {
            Mnemonic::B => 0b000101 << 26,
            Mnemonic::BL => 0b100101 << 26,
            Mnemonic::CBZ => 0b10110100 << 24,
            Mnemonic::CBNZ => 0b10110101 << 24,
            Mnemonic::TBZ => 0b01101100 << 24,
            Mnemonic::TBNZ => 0b01101101 << 24,
            Mnemonic::BCond(_) => 0b01010100 << 24,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mnemonic::B => write!(f, "B"),
            Mnemonic::BL => write!(f, "BL"),
            Mnemonic::CBZ => write!(f, "CBZ"),
            Mnemonic::CBNZ => write!(f, "CBNZ"),
            Mnemonic::TBZ => write!(f, "TBZ"),
            Mnemonic::TBNZ => write!(f, "TBNZ"),
            Mnemonic::BCond(cond) => write!(f, "B.{}", cond.mnemonic().to_uppercase()),
        }
    }
}
