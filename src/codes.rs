use std::fmt::Display;

use serde::Deserialize;
use thiserror::Error;

/// Fan speed, stored as the frame's fan code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, enumn::N)]
pub enum Fan {
    #[serde(rename = "auto", alias = "Auto", alias = "自动")]
    Auto = 0xa0,
    #[serde(rename = "low", alias = "Low", alias = "低")]
    Low = 0xe0,
}

impl Fan {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Operating mode, stored as the low nibble of the temperature/mode byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, enumn::N)]
pub enum Mode {
    #[serde(rename = "cool", alias = "Cool", alias = "制冷")]
    Cool = 0x0,
    #[serde(rename = "heat", alias = "Heat", alias = "制热")]
    Heat = 0xc,
}

impl Mode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemperatureError {
    #[error("Temperature {0}°C out of allowed range.")]
    Range(i32),
}

/// Set point in whole degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temperature(u8);

impl Temperature {
    pub const MIN: u8 = 16;
    pub const MAX: u8 = 30;

    // Indexed by `celsius - MIN`. The unit has no code below 17°C, so 16 shares it.
    const CODES: [u8; 15] = [
        0x0, // 16
        0x0, // 17
        0x1, // 18
        0x3, // 19
        0x2, // 20
        0x6, // 21
        0x7, // 22
        0x5, // 23
        0x4, // 24
        0xc, // 25
        0xd, // 26
        0x9, // 27
        0x8, // 28
        0xa, // 29
        0xb, // 30
    ];

    pub fn new(celsius: i32) -> Result<Self, TemperatureError> {
        u8::try_from(celsius)
            .ok()
            .filter(|value| (Self::MIN..=Self::MAX).contains(value))
            .map(Self)
            .ok_or(TemperatureError::Range(celsius))
    }

    pub fn celsius(self) -> u8 {
        self.0
    }

    /// The 4-bit code placed in the high nibble of the temperature/mode byte.
    pub fn code(self) -> u8 {
        Self::CODES[(self.0 - Self::MIN) as usize]
    }

    /// Reverse lookup. A code shared by several temperatures resolves to the highest.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::CODES
            .iter()
            .rposition(|&c| c == code)
            .map(|index| Self(Self::MIN + index as u8))
    }

    pub fn all() -> impl Iterator<Item = Temperature> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

/// The unit's power-on set point, 26°C.
impl Default for Temperature {
    fn default() -> Self {
        Self(26)
    }
}

impl TryFrom<i32> for Temperature {
    type Error = TemperatureError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for u8 {
    fn from(temperature: Temperature) -> Self {
        temperature.celsius()
    }
}

/// Command parameter named in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Temperature,
    Mode,
    Fan,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Temperature => "temperature",
            Self::Mode => "mode",
            Self::Fan => "fan",
        };
        f.write_str(name)
    }
}
