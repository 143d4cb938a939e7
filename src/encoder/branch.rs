// Fri Jan 16 2026 - Alex

use std::fmt;

use super::error::EncodeError;
use super::mnemonic::Mnemonic;
use crate::address::Address;
use crate::utils::hex_string;

const IMM26_MASK: u32 = 0x03FF_FFFF;
const IMM19_MASK: u32 = 0x0007_FFFF;
const IMM26_RANGE: i64 = 1 << 25;
const IMM19_RANGE: i64 = 1 << 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionWord(u32);

impl InstructionWord {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// 8 hex digits, most significant byte first.
    pub fn to_hex(&self) -> String {
        format!("{:08x}", self.0)
    }

    /// 8 hex digits in AArch64 memory order.
    pub fn to_le_hex(&self) -> String {
        hex_string(&self.0.to_le_bytes())
    }

    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::LowerHex for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

pub struct BranchEncoder;

impl BranchEncoder {
    /// Encode a PC-relative branch from `current` to `target`.
    ///
    /// B/BL carry `(target - current) / 4` in imm26; B.<cond> carries
    /// `(target - current - 4) / 4` in imm19 with the condition in bits 4-0.
    pub fn encode(
        current: Address,
        target: Address,
        mnemonic: &str,
    ) -> Result<InstructionWord, EncodeError> {
        let mnemonic = Mnemonic::parse(mnemonic)?;
        let distance = target.distance(current);

        let word = match mnemonic {
            Mnemonic::B | Mnemonic::BL => {
                let offset = Self::instruction_offset(distance, current, target)?;
                if offset < -IMM26_RANGE || offset >= IMM26_RANGE {
                    return Err(EncodeError::OffsetOutOfRange(mnemonic.to_string()));
                }
                mnemonic.fixed_bits() | ((offset as u32) & IMM26_MASK)
            }
            Mnemonic::BCond(cond) => {
                let offset =
                    Self::instruction_offset(distance.wrapping_sub(4), current, target)?;
                if offset < -IMM19_RANGE || offset >= IMM19_RANGE {
                    return Err(EncodeError::OffsetOutOfRange(mnemonic.to_string()));
                }
                mnemonic.fixed_bits()
                    | (((offset as u32) & IMM19_MASK) << 5)
                    | (cond.to_code() as u32)
            }
            Mnemonic::CBZ | Mnemonic::CBNZ | Mnemonic::TBZ | Mnemonic::TBNZ => {
                return Err(EncodeError::NotImplemented(mnemonic.to_string()));
            }
        };

        Ok(InstructionWord::new(word))
    }

    fn instruction_offset(
        distance: i64,
        current: Address,
        target: Address,
    ) -> Result<i64, EncodeError> {
        if distance % 4 != 0 {
            return Err(EncodeError::MisalignedTarget {
                current: current.as_u64(),
                target: target.as_u64(),
            });
        }
        Ok(distance / 4)
    }
}
