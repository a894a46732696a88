use std::fmt;

/// A single decoded ITH-11-B reading.
///
/// Constructed fresh for every decoded advertisement; the decoder either
/// produces all three values or nothing, so none of the fields is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Temperature in °C, one decimal of resolution.
    pub temperature: f32,
    /// Relative humidity in %, one decimal of resolution.
    pub humidity: f32,
    /// Battery level as the raw payload byte (0-255, no clamp applied).
    pub battery: u8,
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature={:.1}°C humidity={:.1}% battery={}%",
            self.temperature, self.humidity, self.battery
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_one_decimal() {
        let reading = SensorReading {
            temperature: 16.1,
            humidity: 99.9,
            battery: 70,
        };
        assert_eq!(
            reading.to_string(),
            "temperature=16.1°C humidity=99.9% battery=70%"
        );
    }
}
