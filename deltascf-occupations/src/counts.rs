use crate::error::OccupationError;
use crate::spin::SpinChannel;

/// Number of bands and number of occupied bands per spin channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandCounts {
    pub nbnd: usize,
    pub nup_occ: usize,
    pub ndown_occ: usize,
}

impl BandCounts {
    pub fn explicit(nbnd: usize, nup_occ: usize, ndown_occ: usize) -> Self {
        Self {
            nbnd,
            nup_occ,
            ndown_occ,
        }
    }

    /// Distributes `n_electrons` valence electrons over the two spin channels for a
    /// state with spin multiplicity 2S + 1. The excess electrons sit in the
    /// spin-up channel. Besides the bands up to the HOMO, `n_excited_states` empty
    /// bands are added.
    pub fn from_electrons(
        n_electrons: usize,
        multiplicity: usize,
        n_excited_states: usize,
    ) -> Result<Self, OccupationError> {
        let invalid = OccupationError::InvalidElectronCount {
            n_electrons,
            multiplicity,
        };
        if n_electrons == 0 || multiplicity == 0 {
            return Err(invalid);
        }
        let n_unpaired: usize = multiplicity - 1;
        if n_unpaired > n_electrons || (n_electrons + n_unpaired) % 2 != 0 {
            return Err(invalid);
        }
        let homo: usize = (n_electrons + 1) / 2;
        Ok(Self {
            nbnd: homo + n_excited_states,
            nup_occ: (n_electrons + n_unpaired) / 2,
            ndown_occ: (n_electrons - n_unpaired) / 2,
        })
    }

    pub fn occupied(&self, channel: SpinChannel) -> usize {
        match channel {
            SpinChannel::Up => self.nup_occ,
            SpinChannel::Down => self.ndown_occ,
        }
    }

    pub fn n_electrons(&self) -> usize {
        self.nup_occ + self.ndown_occ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negatively_charged_nv_center() {
        // 62 carbon atoms with 4 and N- with 6 valence electrons, triplet
        let counts = BandCounts::from_electrons(62 * 4 + 6, 3, 25).unwrap();
        assert_eq!(counts, BandCounts::explicit(152, 128, 126));
        assert_eq!(counts.occupied(SpinChannel::Up), 128);
        assert_eq!(counts.occupied(SpinChannel::Down), 126);
        assert_eq!(counts.n_electrons(), 254);
    }

    #[test]
    fn closed_shell_and_doublet() {
        assert_eq!(
            BandCounts::from_electrons(8, 1, 4).unwrap(),
            BandCounts::explicit(8, 4, 4)
        );
        assert_eq!(
            BandCounts::from_electrons(9, 2, 0).unwrap(),
            BandCounts::explicit(5, 5, 4)
        );
    }

    #[test]
    fn inconsistent_multiplicity() {
        for (n_electrons, multiplicity) in [(8, 2), (9, 1), (2, 4), (0, 1), (4, 0)] {
            let err = BandCounts::from_electrons(n_electrons, multiplicity, 10).unwrap_err();
            assert!(matches!(err, OccupationError::InvalidElectronCount { .. }));
        }
    }
}
