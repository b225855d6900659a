//! Maps raw UV and air-quality metrics onto display categories.

use std::fmt;

/// An sRGB color used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// `rgb(r, g, b)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvTier {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvTier {
    pub fn label(&self) -> &'static str {
        match self {
            UvTier::Low => "Low",
            UvTier::Moderate => "Moderate",
            UvTier::High => "High",
            UvTier::VeryHigh => "Very High",
            UvTier::Extreme => "Extreme",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            UvTier::Low => Rgb(0x86, 0xEF, 0xAC),
            UvTier::Moderate => Rgb(0xFD, 0xE0, 0x47),
            UvTier::High => Rgb(0xFB, 0x92, 0x3C),
            UvTier::VeryHigh => Rgb(0xF8, 0x71, 0x71),
            UvTier::Extreme => Rgb(0xC0, 0x84, 0xFC),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvStatus {
    pub tier: UvTier,
    pub label: &'static str,
    pub color: Rgb,
}

/// Classify a UV index. Boundaries are inclusive at 2, 5, 7 and 10.
pub fn classify_uv(value: f64) -> UvStatus {
    let tier = if value <= 2.0 {
        UvTier::Low
    } else if value <= 5.0 {
        UvTier::Moderate
    } else if value <= 7.0 {
        UvTier::High
    } else if value <= 10.0 {
        UvTier::VeryHigh
    } else {
        UvTier::Extreme
    };

    UvStatus { tier, label: tier.label(), color: tier.color() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiTier {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiTier {
    pub fn label(&self) -> &'static str {
        match self {
            AqiTier::Good => "Good",
            AqiTier::Moderate => "Moderate",
            AqiTier::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiTier::Unhealthy => "Unhealthy",
            AqiTier::VeryUnhealthy => "Very Unhealthy",
            AqiTier::Hazardous => "Hazardous",
        }
    }

    /// Text color of the index value.
    pub fn color(&self) -> Rgb {
        match self {
            AqiTier::Good => Rgb(0, 153, 102),
            AqiTier::Moderate => Rgb(255, 222, 51),
            AqiTier::UnhealthyForSensitive => Rgb(255, 153, 51),
            AqiTier::Unhealthy => Rgb(204, 0, 51),
            AqiTier::VeryUnhealthy => Rgb(102, 0, 153),
            AqiTier::Hazardous => Rgb(126, 0, 35),
        }
    }

    /// Fill color of the gauge bar.
    pub fn bar_color(&self) -> Rgb {
        match self {
            AqiTier::Good => Rgb(0x00, 0x99, 0x66),
            AqiTier::Moderate => Rgb(0xFF, 0xDE, 0x33),
            AqiTier::UnhealthyForSensitive => Rgb(0xFF, 0x99, 0x33),
            AqiTier::Unhealthy => Rgb(0xCC, 0x00, 0x33),
            AqiTier::VeryUnhealthy => Rgb(0x66, 0x00, 0x99),
            AqiTier::Hazardous => Rgb(0x7E, 0x00, 0x23),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiStatus {
    pub tier: AqiTier,
    pub label: &'static str,
    pub color: Rgb,
    pub bar_color: Rgb,
}

/// Multiplier from the provider's 1..=6 US EPA category onto the 0..300+ scale.
pub const AQI_SCALE: f64 = 50.0;

/// Classify an air-quality value on the 0..300+ scale (provider category × 50).
pub fn classify_aqi(value: f64) -> AqiStatus {
    let tier = if value <= 50.0 {
        AqiTier::Good
    } else if value <= 100.0 {
        AqiTier::Moderate
    } else if value <= 150.0 {
        AqiTier::UnhealthyForSensitive
    } else if value <= 200.0 {
        AqiTier::Unhealthy
    } else if value <= 300.0 {
        AqiTier::VeryUnhealthy
    } else {
        AqiTier::Hazardous
    };

    AqiStatus { tier, label: tier.label(), color: tier.color(), bar_color: tier.bar_color() }
}
