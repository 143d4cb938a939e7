// Fri Jan 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EndianError {
    #[error("Malformed hex input '{0}': expected an even number of hex digits")]
    MalformedHexInput(String),
}

/// Reverse the byte pairs of a hex string, turning the natural
/// most-significant-byte-first rendering into AArch64 memory order.
/// Applying it twice returns the input.
pub fn to_little_endian_hex(hex: &str) -> Result<String, EndianError> {
    if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EndianError::MalformedHexInput(hex.to_string()));
    }

    let mut out = String::with_capacity(hex.len());
    for pair in hex.as_bytes().chunks(2).rev() {
        out.push(pair[0] as char);
        out.push(pair[1] as char);
    }

    Ok(out)
}
