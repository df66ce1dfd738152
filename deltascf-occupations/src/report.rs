use crate::defaults::{OCCUPIED, UNOCCUPIED};
use crate::error::BoundsWarning;
use crate::ranges::summarize_bands;
use crate::spin::SpinChannel;
use crate::vector::OccupationVector;
use serde::{Deserialize, Serialize};

/// Occupied and empty bands of one channel, e.g. `"1–125,127"` and `"126,128–152"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChannelSummary {
    pub occupied: String,
    pub unoccupied: String,
}

impl From<&OccupationVector> for ChannelSummary {
    fn from(vector: &OccupationVector) -> Self {
        Self {
            occupied: summarize_bands(vector, OCCUPIED),
            unoccupied: summarize_bands(vector, UNOCCUPIED),
        }
    }
}

/// Result of writing an occupation card. Printing it is left to the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OccupationReport {
    pub nbnd: usize,
    pub up_count: f64,
    pub down_count: f64,
    pub total_count: f64,
    pub up_summary: ChannelSummary,
    pub down_summary: ChannelSummary,
    pub warnings: Vec<BoundsWarning>,
}

impl OccupationReport {
    pub fn new(up: &OccupationVector, down: &OccupationVector, warnings: Vec<BoundsWarning>) -> Self {
        let up_count: f64 = up.electron_count();
        let down_count: f64 = down.electron_count();
        Self {
            nbnd: up.nbnd(),
            up_count,
            down_count,
            total_count: up_count + down_count,
            up_summary: ChannelSummary::from(up),
            down_summary: ChannelSummary::from(down),
            warnings,
        }
    }

    pub fn count(&self, channel: SpinChannel) -> f64 {
        match channel {
            SpinChannel::Up => self.up_count,
            SpinChannel::Down => self.down_count,
        }
    }

    pub fn summary(&self, channel: SpinChannel) -> &ChannelSummary {
        match channel {
            SpinChannel::Up => &self.up_summary,
            SpinChannel::Down => &self.down_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excitation::{apply_excitations, Excitation};
    use approx::assert_abs_diff_eq;

    #[test]
    fn counts_and_summaries_per_channel() {
        let up = OccupationVector::ground_state(SpinChannel::Up, 8, 5).unwrap();
        let down = OccupationVector::ground_state(SpinChannel::Down, 8, 3).unwrap();
        let (down, warnings) = apply_excitations(down, &[Excitation::new(3, 8)]);
        let report = OccupationReport::new(&up, &down, warnings);

        assert_abs_diff_eq!(report.count(SpinChannel::Up), 5.0);
        assert_abs_diff_eq!(report.count(SpinChannel::Down), 3.0);
        assert_abs_diff_eq!(report.total_count, 8.0);
        assert_eq!(report.summary(SpinChannel::Up).occupied, "1–5");
        assert_eq!(report.summary(SpinChannel::Down).occupied, "1–2,8");
        assert_eq!(report.summary(SpinChannel::Down).unoccupied, "3–7");
    }
}
