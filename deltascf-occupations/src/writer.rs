use crate::counts::BandCounts;
use crate::defaults::{HEADER, ROW_WIDTH};
use crate::error::{BoundsWarning, OccupationError};
use crate::excitation::{apply_excitations, Excitation};
use crate::grid::grid_rows;
use crate::report::OccupationReport;
use crate::spin::SpinChannel;
use crate::vector::{check_occupation, OccupationVector};
use derive_builder::Builder;
use log::debug;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the `OCCUPATIONS` card of a spin-polarized ΔSCF calculation.
/// An instance is created with the associated builder:
/// ```
/// use deltascf_occupations::{Excitation, OccupationFileWriterBuilder};
///
/// let writer = OccupationFileWriterBuilder::default()
///     .nbnd(152)
///     .nup_occ(128)
///     .ndown_occ(126)
///     .excitations(vec![Excitation::homo_lumo(126)])
///     .build()
///     .unwrap();
/// let mut card: Vec<u8> = Vec::new();
/// let report = writer.write_into(&mut card).unwrap();
/// assert_eq!(report.down_summary.occupied, "1–125,127");
/// ```
#[derive(Builder, Clone, Debug)]
pub struct OccupationFileWriter {
    nbnd: usize,
    nup_occ: usize,
    ndown_occ: usize,
    #[builder(default)]
    excitations: Vec<Excitation>,
    /// Channel the excitations are applied to.
    #[builder(default)]
    channel: SpinChannel,
    #[builder(default = "ROW_WIDTH")]
    row_width: usize,
}

impl OccupationFileWriterBuilder {
    /// Sets `nbnd`, `nup_occ` and `ndown_occ` at once.
    pub fn counts(&mut self, counts: BandCounts) -> &mut Self {
        self.nbnd = Some(counts.nbnd);
        self.nup_occ = Some(counts.nup_occ);
        self.ndown_occ = Some(counts.ndown_occ);
        self
    }
}

impl OccupationFileWriter {
    /// Builds both channels and excites the target channel. Nothing is built if
    /// one of the channels is invalid.
    fn occupations(
        &self,
    ) -> Result<(OccupationVector, OccupationVector, Vec<BoundsWarning>), OccupationError> {
        if self.row_width == 0 {
            return Err(OccupationError::InvalidRowWidth {
                width: self.row_width,
            });
        }
        check_occupation(SpinChannel::Up, self.nbnd, self.nup_occ)?;
        check_occupation(SpinChannel::Down, self.nbnd, self.ndown_occ)?;
        let up = OccupationVector::ground_state(SpinChannel::Up, self.nbnd, self.nup_occ)?;
        let down = OccupationVector::ground_state(SpinChannel::Down, self.nbnd, self.ndown_occ)?;
        debug!(
            "{} excitation(s) in the {} channel",
            self.excitations.len(),
            self.channel
        );

        Ok(match self.channel {
            SpinChannel::Up => {
                let (up, warnings) = apply_excitations(up, &self.excitations);
                (up, down, warnings)
            }
            SpinChannel::Down => {
                let (down, warnings) = apply_excitations(down, &self.excitations);
                (up, down, warnings)
            }
        })
    }

    fn write_card<W: Write>(
        &self,
        sink: &mut W,
        up: &OccupationVector,
        down: &OccupationVector,
    ) -> io::Result<()> {
        writeln!(sink, "{}", HEADER)?;
        for row in grid_rows(up, self.row_width) {
            writeln!(sink, "{}", row)?;
        }
        writeln!(sink)?;
        for row in grid_rows(down, self.row_width) {
            writeln!(sink, "{}", row)?;
        }
        Ok(())
    }

    /// Writes the card to `path`. The card is written to a temporary file in the
    /// same directory which replaces `path` only after it was completely
    /// written, so `path` is never left with a partial card. A new card is
    /// created with the permissions of the umask, an existing card keeps its mode.
    pub fn write_to(&self, path: &Path) -> Result<OccupationReport, OccupationError> {
        let (up, down, warnings) = self.occupations()?;
        let io_error = |source: io::Error| OccupationError::Io {
            destination: path.display().to_string(),
            source,
        };
        let directory: &Path = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp: NamedTempFile = temporary_card(directory).map_err(io_error)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.write_card(&mut writer, &up, &down)
                .and_then(|_| writer.flush())
                .map_err(io_error)?;
        }
        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(io_error)?;
        }
        tmp.as_file().sync_all().map_err(io_error)?;
        tmp.persist(path).map_err(|err| io_error(err.error))?;
        debug!("occupations written to {}", path.display());

        Ok(OccupationReport::new(&up, &down, warnings))
    }

    /// Writes the card to an arbitrary stream. The card is rendered completely
    /// before the first byte is written.
    pub fn write_into<W: Write>(&self, sink: &mut W) -> Result<OccupationReport, OccupationError> {
        let (up, down, warnings) = self.occupations()?;
        let mut card: Vec<u8> = Vec::new();
        self.write_card(&mut card, &up, &down)
            .and_then(|_| sink.write_all(&card))
            .and_then(|_| sink.flush())
            .map_err(|source| OccupationError::Io {
                destination: String::from("stream"),
                source,
            })?;

        Ok(OccupationReport::new(&up, &down, warnings))
    }
}

// rw for everybody, reduced by the umask when the file is created
#[allow(unused_mut)]
fn temporary_card(directory: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(directory)
}
