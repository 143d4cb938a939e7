// Fri Jan 16 2026 - Alex

#![allow(dead_code)]

pub mod address;
pub mod encoder;
pub mod endian;
pub mod output;
pub mod utils;

pub use address::Address;
pub use encoder::{BranchEncoder, Condition, EncodeError, InstructionWord, Mnemonic};
pub use endian::{to_little_endian_hex, EndianError};
pub use output::EncodeReport;
