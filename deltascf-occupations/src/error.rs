use crate::excitation::Excitation;
use crate::spin::SpinChannel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Fatal errors. Nothing is written to the destination if one of these occurs.
#[derive(Debug, thiserror::Error)]
pub enum OccupationError {
    #[error("invalid number of bands nbnd={nbnd}, nbnd has to be at least 1")]
    InvalidBandCount { nbnd: usize },
    #[error("invalid occupation for {channel}: n_occ={n_occ} is outside of the valid range [0, {nbnd}]")]
    InvalidOccupation {
        channel: SpinChannel,
        n_occ: usize,
        nbnd: usize,
    },
    #[error("invalid row width {width}, at least one occupation per row is required")]
    InvalidRowWidth { width: usize },
    #[error(
        "{n_electrons} electrons cannot be distributed with multiplicity {multiplicity}: \
         require n_electrons >= 1, 1 <= multiplicity <= n_electrons + 1 and an even \
         n_electrons + multiplicity - 1"
    )]
    InvalidElectronCount {
        n_electrons: usize,
        multiplicity: usize,
    },
    #[error("unable to write the occupations to {destination}")]
    Io {
        destination: String,
        #[source]
        source: io::Error,
    },
}

/// Non-fatal problem of a single excitation. The excitation was skipped, all
/// other excitations were still applied.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundsWarning {
    pub excitation: Excitation,
    pub nbnd: usize,
}

impl fmt::Display for BoundsWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "excitation indices ({}, {}) are outside of 1..={} (nbnd={})",
            self.excitation.vacate, self.excitation.fill, self.nbnd, self.nbnd
        )
    }
}
