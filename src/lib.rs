pub mod codes;
pub mod command;
pub mod encoder;
pub mod frame;

pub use codes::{Fan, Field, Mode, Temperature};
pub use command::{Action, Command, Params, Setpoint, Target};
pub use encoder::{EncodeError, Encoder, EncoderConfig};
pub use frame::{Frame, FrameError};

/// Encode a command with the default encoder configuration.
pub fn encode(command: &Command) -> Result<String, EncodeError> {
    Encoder::default().encode(command)
}

fn complement(byte: u8) -> u8 {
    !byte
}
