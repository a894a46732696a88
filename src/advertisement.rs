/// Advertisement snapshot consumed by the decoder
use std::collections::HashMap;

use uuid::Uuid;

use crate::decoder::{decode_manufacturer_data, INKBIRD_MANUFACTURER_ID};
use crate::models::SensorReading;

/// One BLE advertisement event as handed over by the observation layer.
///
/// Carries the manufacturer data map keyed by company id and the service
/// data map keyed by service UUID, matching the shapes the Linux BLE stack
/// exposes per device. Only manufacturer data is consulted when decoding;
/// service data is kept for callers that capture full advertisements.
#[derive(Debug, Clone, Default)]
pub struct Advertisement {
    pub manufacturer_data: HashMap<u16, Vec<u8>>,
    pub service_data: HashMap<Uuid, Vec<u8>>,
}

impl Advertisement {
    /// Build an advertisement from manufacturer data alone.
    pub fn from_manufacturer_data(manufacturer_data: HashMap<u16, Vec<u8>>) -> Self {
        Advertisement {
            manufacturer_data,
            service_data: HashMap::new(),
        }
    }

    /// Decode the ITH-11-B reading carried by this advertisement, if any.
    ///
    /// Looks up the Inkbird company id entry and runs the fixed-offset
    /// decoder on it. Advertisements without that entry, or with a payload
    /// the decoder rejects, yield None.
    pub fn reading(&self) -> Option<SensorReading> {
        let payload = self.manufacturer_data.get(&INKBIRD_MANUFACTURER_ID)?;
        decode_manufacturer_data(INKBIRD_MANUFACTURER_ID, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0x02, 0x28, 0x07, 0x5C, 0xA1, 0x00, 0xE7, 0x03, 0x46, 0x00, 0x44, 0x08, 0x00, 0x00, 0x00,
        0x00,
    ];

    #[test]
    fn reading_decodes_inkbird_entry() {
        let adv = Advertisement::from_manufacturer_data(HashMap::from([(
            INKBIRD_MANUFACTURER_ID,
            SAMPLE.to_vec(),
        )]));
        let reading = adv.reading().unwrap();
        assert_eq!(reading.temperature, 16.1);
        assert_eq!(reading.humidity, 99.9);
        assert_eq!(reading.battery, 70);
    }

    #[test]
    fn reading_ignores_foreign_entries() {
        // Same payload keyed by the RuuviTag company id must not decode
        let adv = Advertisement::from_manufacturer_data(HashMap::from([(
            0x0499u16,
            SAMPLE.to_vec(),
        )]));
        assert_eq!(adv.reading(), None);
    }

    #[test]
    fn reading_ignores_service_data() {
        let mut adv = Advertisement::default();
        adv.service_data.insert(Uuid::nil(), SAMPLE.to_vec());
        assert_eq!(adv.reading(), None);
    }

    #[test]
    fn empty_advertisement_has_no_reading() {
        assert_eq!(Advertisement::default().reading(), None);
    }
}
