use crate::defaults::*;
use deltascf_occupations::defaults::{OCCUPATIONS_FILE_NAME, ROW_WIDTH};
use deltascf_occupations::{Excitation, SpinChannel};
use serde::{Deserialize, Serialize};

fn default_verbose() -> i8 {
    VERBOSE
}
fn default_nbnd() -> usize {
    NBND
}
fn default_nup_occ() -> usize {
    NUP_OCC
}
fn default_ndown_occ() -> usize {
    NDOWN_OCC
}
fn default_multiplicity() -> usize {
    MULTIPLICITY
}
fn default_n_excited_states() -> usize {
    N_EXCITED_STATES
}
fn default_channel() -> SpinChannel {
    SpinChannel::Down
}
fn default_pairs() -> Vec<Excitation> {
    Vec::new()
}
fn default_homo_lumo() -> bool {
    HOMO_LUMO
}
fn default_filename() -> String {
    String::from(OCCUPATIONS_FILE_NAME)
}
fn default_row_width() -> usize {
    ROW_WIDTH
}
fn default_bands_config() -> BandsConfig {
    let bands_config: BandsConfig = toml::from_str("").unwrap();
    bands_config
}
fn default_excitation_config() -> ExcitationConfig {
    let excitation_config: ExcitationConfig = toml::from_str("").unwrap();
    excitation_config
}
fn default_output_config() -> OutputConfig {
    let output_config: OutputConfig = toml::from_str("").unwrap();
    output_config
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Configuration {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_bands_config")]
    pub bands: BandsConfig,
    /// If set, the band counts are derived from the number of electrons and
    /// the `bands` section is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electrons: Option<ElectronsConfig>,
    #[serde(default = "default_excitation_config")]
    pub excitation: ExcitationConfig,
    #[serde(default = "default_output_config")]
    pub output: OutputConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BandsConfig {
    #[serde(default = "default_nbnd")]
    pub nbnd: usize,
    #[serde(default = "default_nup_occ")]
    pub nup_occ: usize,
    #[serde(default = "default_ndown_occ")]
    pub ndown_occ: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ElectronsConfig {
    pub n_electrons: usize,
    #[serde(default = "default_multiplicity")]
    pub multiplicity: usize,
    #[serde(default = "default_n_excited_states")]
    pub n_excited_states: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExcitationConfig {
    #[serde(default = "default_channel")]
    pub channel: SpinChannel,
    /// pairs of [vacated band, filled band], 1-based
    #[serde(default = "default_pairs")]
    pub pairs: Vec<Excitation>,
    #[serde(default = "default_homo_lumo")]
    pub homo_lumo: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OutputConfig {
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_row_width")]
    pub row_width: usize,
    /// JSON file for the summary of the written card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config() {
        let config: Configuration = toml::from_str("").unwrap();
        assert_eq!(config.verbose, 0);
        assert_eq!(config.bands.nbnd, 152);
        assert_eq!(config.bands.nup_occ, 128);
        assert_eq!(config.bands.ndown_occ, 126);
        assert!(config.electrons.is_none());
        assert_eq!(config.excitation.channel, SpinChannel::Down);
        assert!(config.excitation.pairs.is_empty());
        assert!(!config.excitation.homo_lumo);
        assert_eq!(config.output.filename, "occupations.out");
        assert_eq!(config.output.row_width, 10);
        assert!(config.output.report.is_none());
    }

    #[test]
    fn full_config() {
        let input: &str = r#"
            verbose = 1

            [electrons]
            n_electrons = 254
            multiplicity = 3

            [excitation]
            channel = "up"
            pairs = [[126, 127], [128, 130]]

            [output]
            filename = "dscf/occupations.card"
            report = "dscf/occupations.json"
        "#;
        let config: Configuration = toml::from_str(input).unwrap();
        assert_eq!(config.verbose, 1);
        let electrons = config.electrons.unwrap();
        assert_eq!(electrons.n_electrons, 254);
        assert_eq!(electrons.multiplicity, 3);
        assert_eq!(electrons.n_excited_states, 25);
        assert_eq!(config.excitation.channel, SpinChannel::Up);
        assert_eq!(
            config.excitation.pairs,
            vec![Excitation::new(126, 127), Excitation::new(128, 130)]
        );
        assert_eq!(config.output.filename, "dscf/occupations.card");
        assert_eq!(config.output.report.as_deref(), Some("dscf/occupations.json"));
    }

    #[test]
    fn written_defaults_can_be_read_again() {
        let config: Configuration = toml::from_str("").unwrap();
        let text: String = toml::to_string(&config).unwrap();
        let reread: Configuration = toml::from_str(&text).unwrap();
        assert_eq!(reread.bands.nbnd, config.bands.nbnd);
        assert_eq!(reread.output.filename, config.output.filename);
    }

    #[test]
    fn negative_band_count_is_rejected() {
        assert!(toml::from_str::<Configuration>("[bands]\nnbnd = -4").is_err());
    }
}
