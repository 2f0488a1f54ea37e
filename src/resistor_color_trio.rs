//! Three-band resistor color decoding with metric prefixes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
}

impl Color {
    fn value(self) -> u64 {
        self as u64
    }
}

/// Resistance of a three-band resistor: the first two bands are significant
/// digits, the third is the power-of-ten multiplier.
pub fn ohms(bands: [Color; 3]) -> u64 {
    (bands[0].value() * 10 + bands[1].value()) * 10u64.pow(bands[2].value() as u32)
}

/// Human-readable label, scaled to the largest whole metric prefix:
/// "33 ohms", "2 kiloohms", "1 gigaohm" style (singular for exactly one).
pub fn label(bands: [Color; 3]) -> String {
    let value = ohms(bands);
    let (scaled, prefix) = if value >= 1_000_000_000 && value % 1_000_000_000 == 0 {
        (value / 1_000_000_000, "giga")
    } else if value >= 1_000_000 && value % 1_000_000 == 0 {
        (value / 1_000_000, "mega")
    } else if value >= 1_000 && value % 1_000 == 0 {
        (value / 1_000, "kilo")
    } else {
        (value, "")
    };
    let unit = if scaled == 1 { "ohm" } else { "ohms" };
    format!("{} {}{}", scaled, prefix, unit)
}
