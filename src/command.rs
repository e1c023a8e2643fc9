use serde::{Deserialize, Deserializer};

use crate::codes::{Fan, Mode};

/// A control command as produced by the command interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub has_command: bool,
    pub target: Target,
    pub action: Action,
    #[serde(default)]
    pub params: Params,
}

impl Command {
    /// An air-conditioner adjust command.
    pub fn adjust(params: Params) -> Self {
        Self {
            has_command: true,
            target: Target::AirConditioner,
            action: Action::Adjust,
            params,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Controlled device class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Target {
    AirConditioner,
    Other(String),
}

impl From<String> for Target {
    fn from(label: String) -> Self {
        match label.as_str() {
            "air_conditioner" | "ac" | "空调" => Self::AirConditioner,
            _ => Self::Other(label),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AirConditioner => f.write_str("air_conditioner"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// Requested operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Action {
    Adjust,
    Other(String),
}

impl From<String> for Action {
    fn from(label: String) -> Self {
        match label.as_str() {
            "adjust" | "set" | "调节" => Self::Adjust,
            _ => Self::Other(label),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adjust => f.write_str("adjust"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// A requested set point as the interpreter sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setpoint {
    Celsius(i32),
    /// Not an integer, or too large for one.
    Unrecognized(String),
}

fn lenient_setpoint<'de, D>(deserializer: D) -> Result<Option<Setpoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.map(|value| {
        match value.as_i64().and_then(|v| i32::try_from(v).ok()) {
            Some(celsius) => Setpoint::Celsius(celsius),
            None => Setpoint::Unrecognized(match value.as_str() {
                Some(text) => text.to_owned(),
                None => value.to_string(),
            }),
        }
    }))
}

/// Optional settings. Absent fields are defaulted by the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Params {
    #[serde(default, deserialize_with = "lenient_setpoint")]
    pub temperature: Option<Setpoint>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub fan: Option<Fan>,
}

impl Params {
    /// Degrees Celsius.
    pub fn temperature(mut self, celsius: i32) -> Self {
        self.temperature = Some(Setpoint::Celsius(celsius));
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn fan(mut self, fan: Fan) -> Self {
        self.fan = Some(fan);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_json() {
        let command = Command::from_json(
            r#"{
                "has_command": true,
                "target": "空调",
                "action": "调节",
                "params": { "temperature": 26, "mode": "制热", "fan": "低" }
            }"#,
        )
        .unwrap();

        assert_eq!(
            command,
            Command::adjust(Params::default().temperature(26).mode(Mode::Heat).fan(Fan::Low))
        );
    }

    #[test]
    fn missing_params() {
        let command =
            Command::from_json(r#"{"has_command": true, "target": "ac", "action": "set"}"#)
                .unwrap();
        assert_eq!(command.params, Params::default());
    }

    #[test]
    fn null_params_are_absent() {
        let command = Command::from_json(
            r#"{"target": "ac", "action": "adjust", "params": {"temperature": 18, "mode": null}}"#,
        )
        .unwrap();
        assert!(!command.has_command);
        assert_eq!(command.params, Params::default().temperature(18));
    }

    #[test]
    fn unusable_temperatures_are_kept_as_unrecognized() {
        let temperature = |json: &str| {
            let command = Command::from_json(&format!(
                r#"{{"target": "ac", "action": "adjust", "params": {{"temperature": {json}}}}}"#
            ))
            .unwrap();
            command.params.temperature
        };

        assert_eq!(temperature("21"), Some(Setpoint::Celsius(21)));
        assert_eq!(temperature("45"), Some(Setpoint::Celsius(45)));
        assert_eq!(temperature("null"), None);
        assert_eq!(
            temperature("25.5"),
            Some(Setpoint::Unrecognized("25.5".into()))
        );
        assert_eq!(
            temperature(r#""26""#),
            Some(Setpoint::Unrecognized("26".into()))
        );
        assert_eq!(
            temperature("99999999999"),
            Some(Setpoint::Unrecognized("99999999999".into()))
        );
    }

    #[test]
    fn other_labels_are_kept() {
        let command =
            Command::from_json(r#"{"target": "灯", "action": "打开"}"#).unwrap();
        assert_eq!(command.target, Target::Other("灯".into()));
        assert_eq!(command.action, Action::Other("打开".into()));
        assert_eq!(command.target.to_string(), "灯");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = Command::from_json(
            r#"{"target": "ac", "action": "adjust", "params": {"mode": "dry"}}"#,
        );
        assert!(result.is_err());
    }
}
