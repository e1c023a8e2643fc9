use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::{
    codes::{Fan, Field, Mode, Temperature},
    complement,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("Frame must be 6 bytes, got {0}.")]
    Length(usize),
    #[error("Frame text must be 12 hex digits, got {0}.")]
    TextLength(usize),
    #[error("Frame text is not hexadecimal.")]
    Hex,
    #[error("Header {0:02X?} does not match.")]
    Header([u8; 2]),
    #[error("Check byte {index} does not match.")]
    Checksum { index: usize },
    #[error("Unknown {field} code {code:#04x}.")]
    UnknownCode { field: Field, code: u8 },
}

/// One infrared frame:
///
/// ```text
///  0     1     2     3      4          5
/// B2    4D    FAN   !FAN   TEMP|MODE  !(TEMP|MODE)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub fan: Fan,
    pub mode: Mode,
    pub temperature: Temperature,
}

impl Frame {
    pub const LEN: usize = 6;
    pub const HEADER: [u8; 2] = [0xb2, 0x4d];

    pub fn new(fan: Fan, mode: Mode, temperature: Temperature) -> Self {
        Self {
            fan,
            mode,
            temperature,
        }
    }

    fn temperature_mode(&self) -> u8 {
        (self.temperature.code() << 4) | self.mode.code()
    }

    pub fn to_bytes(&self) -> [u8; Frame::LEN] {
        let [header_hi, header_lo] = Self::HEADER;
        let fan = self.fan.code();
        let temperature_mode = self.temperature_mode();

        [
            header_hi,
            header_lo,
            fan,
            complement(fan),
            temperature_mode,
            complement(temperature_mode),
        ]
    }

    /// Uppercase hex, two digits per byte, no separators.
    pub fn to_hex(&self) -> String {
        self.to_bytes()
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = FrameError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let Ok(bytes) = <[u8; Frame::LEN]>::try_from(value) else {
            return Err(FrameError::Length(value.len()));
        };

        if bytes[..2] != Self::HEADER {
            return Err(FrameError::Header([bytes[0], bytes[1]]));
        }

        // Each payload byte is followed by its complement.
        for index in [3, 5] {
            if bytes[index] != complement(bytes[index - 1]) {
                return Err(FrameError::Checksum { index });
            }
        }

        let fan = Fan::n(bytes[2]).ok_or(FrameError::UnknownCode {
            field: Field::Fan,
            code: bytes[2],
        })?;

        let mode_code = bytes[4] & 0x0f;
        let mode = Mode::n(mode_code).ok_or(FrameError::UnknownCode {
            field: Field::Mode,
            code: mode_code,
        })?;

        let temperature_code = bytes[4] >> 4;
        let temperature =
            Temperature::from_code(temperature_code).ok_or(FrameError::UnknownCode {
                field: Field::Temperature,
                code: temperature_code,
            })?;

        Ok(Self::new(fan, mode, temperature))
    }
}

impl FromStr for Frame {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(FrameError::Hex);
        }
        if s.len() != Self::LEN * 2 {
            return Err(FrameError::TextLength(s.len()));
        }

        let bytes = (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| FrameError::Hex))
            .collect::<Result<Vec<u8>, _>>()?;

        Self::try_from(bytes.as_slice())
    }
}
