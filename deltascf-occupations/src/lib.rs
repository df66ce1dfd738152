//! Spin-resolved band occupations for ΔSCF calculations.
//!
//! The crate builds the ground-state occupation of both spin channels, applies
//! the requested excitations and writes the `OCCUPATIONS` card that is read by
//! the plane-wave code when `occupations = 'from_input'` is used.
pub use counts::*;
pub use error::{BoundsWarning, OccupationError};
pub use excitation::{apply_excitations, Excitation};
pub use grid::grid_rows;
pub use ranges::{compact_ranges, summarize_bands};
pub use report::{ChannelSummary, OccupationReport};
pub use spin::SpinChannel;
pub use vector::OccupationVector;
pub use writer::{OccupationFileWriter, OccupationFileWriterBuilder};

pub mod counts;
pub mod defaults;
pub mod error;
pub mod excitation;
pub mod grid;
pub mod ranges;
pub mod report;
pub mod spin;
pub mod vector;
pub mod writer;
