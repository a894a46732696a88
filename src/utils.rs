/// Utility functions for payload input and log formatting
use time::{format_description, OffsetDateTime};

/// Parse a hex-encoded payload string into raw bytes.
///
/// Accepts the forms hex payloads commonly arrive in when copied out of
/// scanner logs: an optional `0x` prefix and spaces, colons or dashes
/// between bytes (`"0x02 0x28 ..."`, `"02:28:07"`, `"0228075c"`).
pub fn parse_hex_payload(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let normalized: String = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == '-')
        .map(|chunk| chunk.strip_prefix("0x").unwrap_or(chunk))
        .collect();
    hex::decode(normalized)
}

/// Format a timestamp for human-readable logging
///
/// Converts an OffsetDateTime to DD.MM.YYYY - HH:MM:SS format
/// Falls back to default string representation if formatting fails.
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    let format = format_description::parse("[day].[month].[year] - [hour]:[minute]:[second]")
        .expect("Failed to create format description");
    dt.format(&format).unwrap_or_else(|_| dt.to_string())
}
