// Fri Jan 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid branch opcode '{mnemonic}'. Valid options are: {valid}")]
    UnsupportedOpcode { mnemonic: String, valid: String },
    #[error("Target address is out of range for {0} instruction")]
    OffsetOutOfRange(String),
    #[error("Address difference between 0x{current:x} and 0x{target:x} is not a multiple of 4")]
    MisalignedTarget { current: u64, target: u64 },
    #[error("Branch opcode '{0}' takes a register operand and is not implemented")]
    NotImplemented(String),
}
