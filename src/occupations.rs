use crate::io::{print_parameters, Configuration};
use anyhow::{Context, Result};
use deltascf_occupations::{BandCounts, Excitation, OccupationFileWriterBuilder, OccupationReport};
use log::info;
use std::fs;
use std::path::Path;

/// Band counts of the calculation, either given directly or derived from the
/// number of valence electrons.
pub fn band_counts(config: &Configuration) -> Result<BandCounts> {
    match &config.electrons {
        Some(electrons) => BandCounts::from_electrons(
            electrons.n_electrons,
            electrons.multiplicity,
            electrons.n_excited_states,
        )
        .context("Unable to derive the band counts from the [electrons] section"),
        None => Ok(BandCounts::explicit(
            config.bands.nbnd,
            config.bands.nup_occ,
            config.bands.ndown_occ,
        )),
    }
}

/// Excitations of the target channel: the listed pairs followed by the
/// HOMO -> LUMO excitation, if requested.
pub fn excitations(config: &Configuration, counts: &BandCounts) -> Vec<Excitation> {
    let mut excitations: Vec<Excitation> = config.excitation.pairs.clone();
    if config.excitation.homo_lumo {
        excitations.push(Excitation::homo_lumo(
            counts.occupied(config.excitation.channel),
        ));
    }
    excitations
}

pub fn write_occupations(config: &Configuration) -> Result<OccupationReport> {
    let counts: BandCounts = band_counts(config)?;
    let excitations: Vec<Excitation> = excitations(config, &counts);
    print_parameters(config, &counts, &excitations);

    let writer = OccupationFileWriterBuilder::default()
        .counts(counts)
        .excitations(excitations)
        .channel(config.excitation.channel)
        .row_width(config.output.row_width)
        .build()?;
    let path: &Path = Path::new(&config.output.filename);
    let report: OccupationReport = writer
        .write_to(path)
        .context("Unable to write the occupations")?;
    info!("Occupations file written to {}", path.display());

    if let Some(report_file) = &config.output.report {
        let json: String = serde_json::to_string_pretty(&report)?;
        fs::write(report_file, json)
            .with_context(|| format!("Unable to write the report to {}", report_file))?;
        info!("Report written to {}", report_file);
    }
    Ok(report)
}
