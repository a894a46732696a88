//! Decoder for Inkbird ITH-11-B BLE advertisement payloads.
//!
//! The ITH-11-B broadcasts temperature, humidity and battery level in the
//! manufacturer data of its advertisements under company id 9545. This crate
//! turns one such payload into a [`SensorReading`]; capturing advertisements
//! and publishing readings are the caller's concern.

pub mod advertisement;
pub mod decoder;
pub mod models;
pub mod utils;

pub use advertisement::Advertisement;
pub use decoder::{decode_manufacturer_data, INKBIRD_MANUFACTURER_ID};
pub use models::SensorReading;
