use serde::{Deserialize, Serialize};
use std::fmt;

/// The two spin channels of a spin-polarized calculation. Each channel owns
/// exactly one occupation vector.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpinChannel {
    Up,
    Down,
}

impl Default for SpinChannel {
    fn default() -> Self {
        SpinChannel::Down
    }
}

impl fmt::Display for SpinChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpinChannel::Up => write!(f, "Spin-up"),
            SpinChannel::Down => write!(f, "Spin-down"),
        }
    }
}
