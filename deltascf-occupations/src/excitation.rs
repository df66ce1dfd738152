use crate::defaults::{OCCUPIED, UNOCCUPIED};
use crate::error::BoundsWarning;
use crate::vector::OccupationVector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Moves one electron within a spin channel: band `vacate` is emptied and band
/// `fill` is occupied. Both bands are 1-based. In the configuration an
/// excitation is written as the pair `[vacate, fill]`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Excitation {
    pub vacate: usize,
    pub fill: usize,
}

impl Excitation {
    pub fn new(vacate: usize, fill: usize) -> Self {
        Self { vacate, fill }
    }

    /// HOMO -> LUMO excitation of a channel with `n_occ` occupied bands.
    pub fn homo_lumo(n_occ: usize) -> Self {
        Self::new(n_occ, n_occ + 1)
    }

    // 0-based indices, if both bands exist
    fn indices(&self, nbnd: usize) -> Option<(usize, usize)> {
        let in_bounds = |band: usize| (1..=nbnd).contains(&band);
        if in_bounds(self.vacate) && in_bounds(self.fill) {
            Some((self.vacate - 1, self.fill - 1))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Excitation {
    fn from(pair: (usize, usize)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl From<Excitation> for (usize, usize) {
    fn from(excitation: Excitation) -> Self {
        (excitation.vacate, excitation.fill)
    }
}

/// Applies the excitations in the given order. The two bands of every
/// excitation are overwritten regardless of their previous occupation, so a
/// later excitation wins over an earlier one that touches the same band and the
/// number of electrons is not conserved for excitations out of empty or into
/// occupied bands. Excitations referring to bands outside of `1..=nbnd` are
/// skipped and reported as warnings.
pub fn apply_excitations(
    mut vector: OccupationVector,
    excitations: &[Excitation],
) -> (OccupationVector, Vec<BoundsWarning>) {
    let nbnd: usize = vector.nbnd();
    let mut warnings: Vec<BoundsWarning> = Vec::new();

    for excitation in excitations.iter() {
        match excitation.indices(nbnd) {
            Some((vacate, fill)) => {
                trace!(
                    "{}: band {} -> band {}",
                    vector.channel(),
                    excitation.vacate,
                    excitation.fill
                );
                vector.set(vacate, UNOCCUPIED);
                vector.set(fill, OCCUPIED);
            }
            None => {
                debug!("{}: skip excitation {:?}", vector.channel(), excitation);
                warnings.push(BoundsWarning {
                    excitation: *excitation,
                    nbnd,
                });
            }
        }
    }
    (vector, warnings)
}
