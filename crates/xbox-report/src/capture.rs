//! Capture file format and hex byte parsing
//!
//! Capture files use the same JSON layout as the HID capture tooling:
//! hex-string IDs and one space-separated `0xNN` string per report.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReport {
    pub timestamp_us: u64,
    #[serde(default)]
    pub report_id: u8,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureFile {
    pub vendor_id: String,
    pub product_id: String,
    pub captures: Vec<CaptureReport>,
}

impl CaptureFile {
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let text = std::fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&text)
            .map_err(|e| ToolError::InvalidCapture(format!("{}: {e}", path.display())))?;
        tracing::info!(
            path = %path.display(),
            reports = file.captures.len(),
            "loaded capture file"
        );
        Ok(file)
    }

    /// Vendor and product IDs, if both parse as hex.
    pub fn ids(&self) -> Option<(u16, u16)> {
        let vid = parse_hex_u16(&self.vendor_id).ok()?;
        let pid = parse_hex_u16(&self.product_id).ok()?;
        Some((vid, pid))
    }
}

pub fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(s, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

/// Parse `"00 14 ..."`, `"0x00 0x14 ..."`, `"00,14"` or contiguous `"0014..."`.
///
/// Separated tokens may be one or two digits; longer tokens must have an
/// even number of digits and are split into byte pairs.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, ToolError> {
    let mut bytes = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ToolError::InvalidHex(format!("bad token '{token}'")));
        }

        if digits.len() <= 2 {
            bytes.push(hex_byte(digits.as_bytes(), token)?);
            continue;
        }

        if digits.len() % 2 != 0 {
            return Err(ToolError::InvalidHex(format!(
                "odd number of digits in '{token}'"
            )));
        }
        for pair in digits.as_bytes().chunks(2) {
            bytes.push(hex_byte(pair, token)?);
        }
    }

    if bytes.is_empty() {
        return Err(ToolError::InvalidHex("no bytes given".to_string()));
    }
    Ok(bytes)
}

fn hex_byte(digits: &[u8], token: &str) -> Result<u8, ToolError> {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| u8::from_str_radix(s, 16).ok())
        .ok_or_else(|| ToolError::InvalidHex(format!("bad token '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn hex_spaced() -> TestResult {
        assert_eq!(parse_hex_bytes("00 14 ff")?, vec![0x00, 0x14, 0xFF]);
        Ok(())
    }

    #[test]
    fn hex_prefixed() -> TestResult {
        assert_eq!(parse_hex_bytes("0x00 0x14 0X0A")?, vec![0x00, 0x14, 0x0A]);
        Ok(())
    }

    #[test]
    fn hex_contiguous_and_commas() -> TestResult {
        assert_eq!(parse_hex_bytes("0014FF")?, vec![0x00, 0x14, 0xFF]);
        assert_eq!(parse_hex_bytes("00,14, 1")?, vec![0x00, 0x14, 0x01]);
        Ok(())
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(matches!(parse_hex_bytes("zz"), Err(ToolError::InvalidHex(_))));
        assert!(matches!(parse_hex_bytes("001"), Err(ToolError::InvalidHex(_))));
        assert!(matches!(parse_hex_bytes("0x"), Err(ToolError::InvalidHex(_))));
        assert!(matches!(parse_hex_bytes("   "), Err(ToolError::InvalidHex(_))));
    }

    #[test]
    fn hex_u16() {
        assert_eq!(parse_hex_u16("0x045E"), Ok(0x045E));
        assert_eq!(parse_hex_u16("028e"), Ok(0x028E));
        assert!(parse_hex_u16("nope").is_err());
    }

    #[test]
    fn capture_file_ids() -> TestResult {
        let file: CaptureFile = serde_json::from_str(
            r#"{"vendor_id":"0x045E","product_id":"0x028E","captures":[{"timestamp_us":1,"data":"0x00"}]}"#,
        )?;
        assert_eq!(file.ids(), Some((0x045E, 0x028E)));
        assert_eq!(file.captures.len(), 1);
        assert_eq!(file.captures.first().map(|c| c.report_id), Some(0));
        Ok(())
    }
}
