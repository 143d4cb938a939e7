// Fri Jan 16 2026 - Alex

pub mod branch;
pub mod condition;
pub mod error;
pub mod mnemonic;

pub use branch::{BranchEncoder, InstructionWord};
pub use condition::{parse_condition, Condition};
pub use error::EncodeError;
pub use mnemonic::{valid_forms, Mnemonic};
