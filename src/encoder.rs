use thiserror::Error;

use crate::{
    codes::{Fan, Field, Mode, Temperature},
    command::{Action, Command, Setpoint, Target},
    frame::Frame,
};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Unsupported device: {0}")]
    UnsupportedDevice(String),
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),
    #[error("Unsupported {field} value: {value}")]
    UnsupportedValue { field: Field, value: String },
    #[error("Command JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Values used for parameters the command leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    pub default_mode: Mode,
    pub default_fan: Fan,
    pub default_temperature: Temperature,
    /// Reject unrecognized temperatures instead of falling back to `default_temperature`.
    pub strict: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Cool,
            default_fan: Fan::Auto,
            default_temperature: Temperature::default(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Build the frame for an air-conditioner adjust command.
    ///
    /// Each parameter resolves on its own: the supplied value if present, else the
    /// configured default.
    pub fn frame(&self, command: &Command) -> Result<Frame, EncodeError> {
        if let Target::Other(label) = &command.target {
            return Err(EncodeError::UnsupportedDevice(label.clone()));
        }
        if let Action::Other(label) = &command.action {
            return Err(EncodeError::UnsupportedAction(label.clone()));
        }
        if !command.has_command {
            tracing::warn!("encoding a command not flagged as recognized");
        }

        let params = &command.params;
        let fan = params.fan.unwrap_or(self.config.default_fan);
        let mode = params.mode.unwrap_or(self.config.default_mode);
        let temperature = self.temperature(params.temperature.as_ref())?;

        let frame = Frame::new(fan, mode, temperature);
        tracing::debug!(
            ?fan,
            ?mode,
            celsius = temperature.celsius(),
            code = %frame,
            "encoded frame"
        );

        Ok(frame)
    }

    pub fn encode(&self, command: &Command) -> Result<String, EncodeError> {
        Ok(self.frame(command)?.to_hex())
    }

    pub fn encode_json(&self, json: &str) -> Result<String, EncodeError> {
        let command = Command::from_json(json)?;
        self.encode(&command)
    }

    fn temperature(&self, setpoint: Option<&Setpoint>) -> Result<Temperature, EncodeError> {
        let value = match setpoint {
            None => return Ok(self.config.default_temperature),
            Some(Setpoint::Celsius(celsius)) => match Temperature::new(*celsius) {
                Ok(temperature) => return Ok(temperature),
                Err(_) => celsius.to_string(),
            },
            Some(Setpoint::Unrecognized(value)) => value.clone(),
        };

        if self.config.strict {
            return Err(EncodeError::UnsupportedValue {
                field: Field::Temperature,
                value,
            });
        }

        let fallback = self.config.default_temperature;
        tracing::warn!(%value, fallback = fallback.celsius(), "unrecognized temperature");
        Ok(fallback)
    }
}
