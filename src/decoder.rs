/// Inkbird ITH-11-B manufacturer data decoding
use log::{debug, error, warn};

use crate::models::SensorReading;

// ITH-11-B protocol constants
pub const INKBIRD_MANUFACTURER_ID: u16 = 9545; // Inkbird company id (0x2549)
const MIN_PAYLOAD_LEN: usize = 9; // offsets 4..=8 must be addressable

/// Decode ITH-11-B manufacturer data into a structured reading.
///
/// The ITH-11-B advertises a fixed-layout manufacturer data payload under
/// company id 9545 with the sensor values at fixed offsets:
/// - Bytes 0-3: unspecified, ignored
/// - Bytes 4-5: temperature (unsigned 16-bit little-endian, 0.1°C resolution)
/// - Bytes 6-7: humidity (unsigned 16-bit little-endian, 0.1% resolution)
/// - Byte 8: battery percentage (raw byte, no clamp)
/// - Bytes beyond 8: unspecified, ignored
///
/// The reconstruction is unsigned; this wire format cannot encode
/// temperatures below 0°C.
///
/// # Arguments
/// * `company_id` - Manufacturer/company identifier the payload was keyed by
/// * `data` - Raw manufacturer data bytes from the BLE advertisement
///
/// # Returns
/// Some(SensorReading) with all three values populated if decoding succeeds,
/// None for a foreign company id, an undersized payload, or any internal
/// decoding fault. Never a partial reading, never a panic.
pub fn decode_manufacturer_data(company_id: u16, data: &[u8]) -> Option<SensorReading> {
    if company_id != INKBIRD_MANUFACTURER_ID {
        return None;
    }

    if data.len() < MIN_PAYLOAD_LEN {
        if !data.is_empty() {
            warn!(
                "Invalid ITH-11-B payload: len={}, need at least {}",
                data.len(),
                MIN_PAYLOAD_LEN
            );
        }
        return None;
    }

    // Use a closure with error handling for clean code
    match (|| -> Result<SensorReading, Box<dyn std::error::Error>> {
        // Decode temperature: unsigned 16-bit integer in tenths of a °C
        let temperature = u16::from_le_bytes([data[4], data[5]]) as f32 / 10.0;

        // Decode humidity: unsigned 16-bit integer in tenths of a percent
        let humidity = u16::from_le_bytes([data[6], data[7]]) as f32 / 10.0;

        // Battery: raw byte, surfaced without range clamping
        let battery = data[8];

        // Create SensorReading with proper rounding for display
        Ok(SensorReading {
            temperature: (temperature * 10.0).round() / 10.0,
            humidity: (humidity * 10.0).round() / 10.0,
            battery,
        })
    })() {
        Ok(reading) => {
            debug!(
                "Decoded ITH-11-B reading: temp={:.1}°C, humidity={:.1}%, battery={}%",
                reading.temperature, reading.humidity, reading.battery
            );
            Some(reading)
        }
        Err(e) => {
            error!("Error decoding ITH-11-B payload: {}", e);
            None
        }
    }
}
