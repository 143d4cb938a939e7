// Fri Jan 16 2026 - Alex

pub mod logging;

pub use logging::LoggingUtils;

pub fn hex_string(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}
