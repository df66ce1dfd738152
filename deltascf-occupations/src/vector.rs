use crate::defaults::{OCCUPIED, UNOCCUPIED};
use crate::error::OccupationError;
use crate::spin::SpinChannel;
use ndarray::prelude::*;

/// Checks that `n_occ` bands of `nbnd` can be occupied.
pub(crate) fn check_occupation(
    channel: SpinChannel,
    nbnd: usize,
    n_occ: usize,
) -> Result<(), OccupationError> {
    if nbnd == 0 {
        return Err(OccupationError::InvalidBandCount { nbnd });
    }
    if n_occ > nbnd {
        return Err(OccupationError::InvalidOccupation {
            channel,
            n_occ,
            nbnd,
        });
    }
    Ok(())
}

/// Occupation numbers of one spin channel, ordered by ascending band energy.
/// Every entry is either 1.0 (occupied) or 0.0 (empty).
#[derive(Clone, Debug, PartialEq)]
pub struct OccupationVector {
    channel: SpinChannel,
    occupations: Array1<f64>,
}

impl OccupationVector {
    /// Aufbau filling of the channel: the lowest `n_occ` bands are occupied and
    /// all other bands are empty.
    pub fn ground_state(
        channel: SpinChannel,
        nbnd: usize,
        n_occ: usize,
    ) -> Result<Self, OccupationError> {
        check_occupation(channel, nbnd, n_occ)?;
        let occupations: Array1<f64> =
            Array1::from_shape_fn(nbnd, |i| if i < n_occ { OCCUPIED } else { UNOCCUPIED });
        Ok(Self {
            channel,
            occupations,
        })
    }

    pub fn channel(&self) -> SpinChannel {
        self.channel
    }

    pub fn nbnd(&self) -> usize {
        self.occupations.len()
    }

    pub(crate) fn values(&self) -> &Array1<f64> {
        &self.occupations
    }

    /// Occupation of a band (1-based), `None` if the band does not exist.
    pub fn occupation(&self, band: usize) -> Option<f64> {
        band.checked_sub(1)
            .and_then(|idx| self.occupations.get(idx).copied())
    }

    /// Number of electrons in this channel.
    pub fn electron_count(&self) -> f64 {
        self.occupations.sum()
    }

    /// 1-based indices of all bands with the given occupation in ascending order.
    pub fn bands_with(&self, value: f64) -> Vec<usize> {
        self.occupations
            .iter()
            .enumerate()
            .filter_map(|(i, x)| if *x == value { Some(i + 1) } else { None })
            .collect()
    }

    // 0-based, the caller has checked the bounds
    pub(crate) fn set(&mut self, idx: usize, value: f64) {
        self.occupations[idx] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ground_state_fills_lowest_bands() {
        for nbnd in 1..25 {
            for n_occ in 0..=nbnd {
                let vector = OccupationVector::ground_state(SpinChannel::Up, nbnd, n_occ).unwrap();
                assert_eq!(vector.nbnd(), nbnd);
                assert_abs_diff_eq!(vector.electron_count(), n_occ as f64);
                assert_eq!(vector.bands_with(OCCUPIED), (1..=n_occ).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn all_bands_occupied() {
        let vector = OccupationVector::ground_state(SpinChannel::Down, 4, 4).unwrap();
        assert!(vector.bands_with(UNOCCUPIED).is_empty());
        assert_eq!(vector.values(), &array![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn too_many_occupied_bands() {
        let err = OccupationVector::ground_state(SpinChannel::Down, 10, 11).unwrap_err();
        assert!(matches!(
            err,
            OccupationError::InvalidOccupation {
                channel: SpinChannel::Down,
                n_occ: 11,
                nbnd: 10
            }
        ));
        assert!(err.to_string().contains("n_occ=11"));
        assert!(err.to_string().contains("[0, 10]"));
    }

    #[test]
    fn check_without_building() {
        assert!(check_occupation(SpinChannel::Up, 5, 5).is_ok());
        assert!(check_occupation(SpinChannel::Up, 5, 0).is_ok());
        assert!(matches!(
            check_occupation(SpinChannel::Down, 5, 6),
            Err(OccupationError::InvalidOccupation { n_occ: 6, .. })
        ));
        assert!(matches!(
            check_occupation(SpinChannel::Up, 0, 0),
            Err(OccupationError::InvalidBandCount { nbnd: 0 })
        ));
    }

    #[test]
    fn zero_bands() {
        let err = OccupationVector::ground_state(SpinChannel::Up, 0, 0).unwrap_err();
        assert!(matches!(err, OccupationError::InvalidBandCount { nbnd: 0 }));
    }

    #[test]
    fn occupation_is_one_based() {
        let vector = OccupationVector::ground_state(SpinChannel::Up, 3, 1).unwrap();
        assert_eq!(vector.occupation(0), None);
        assert_eq!(vector.occupation(1), Some(1.0));
        assert_eq!(vector.occupation(3), Some(0.0));
        assert_eq!(vector.occupation(4), None);
    }
}
