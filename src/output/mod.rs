// Sat Jan 17 2026 - Alex

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::address::Address;
use crate::encoder::InstructionWord;

#[derive(Debug, Clone, Serialize)]
pub struct EncodeReport {
    pub mnemonic: String,
    pub current_address: String,
    pub target_address: String,
    pub byte_distance: i64,
    pub big_endian: String,
    pub little_endian: String,
}

impl EncodeReport {
    pub fn new(mnemonic: &str, current: Address, target: Address, word: InstructionWord) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            current_address: format!("0x{:x}", current.as_u64()),
            target_address: format!("0x{:x}", target.as_u64()),
            byte_distance: target.distance(current),
            big_endian: word.to_hex(),
            little_endian: word.to_le_hex(),
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save_json(&self, path: &Path) -> Result<(), std::io::Error> {
        let json_string = self
            .to_json_string()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;

        Ok(())
    }
}
