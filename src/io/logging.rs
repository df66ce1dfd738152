use crate::io::Configuration;
use deltascf_occupations::{BandCounts, Excitation, OccupationReport, SpinChannel};
use itertools::Itertools;
use log::{debug, info, warn};

pub fn print_parameters(config: &Configuration, counts: &BandCounts, excitations: &[Excitation]) {
    info!("{:^80}", "");
    info!("{: ^80}", "Occupations");
    info!("{:-^80}", "");
    info!("{: <25} {}", "output file:", config.output.filename);
    info!("{: <25} {}", "nbnd:", counts.nbnd);
    info!("{: <25} {}", "nup_occ:", counts.nup_occ);
    info!("{: <25} {}", "ndown_occ:", counts.ndown_occ);
    info!("{: <25} {}", "electrons:", counts.n_electrons());
    info!("{: <25} {}", "excited channel:", config.excitation.channel);
    let pairs: String = if excitations.is_empty() {
        String::from("none")
    } else {
        excitations
            .iter()
            .map(|e| format!("({}, {})", e.vacate, e.fill))
            .join(", ")
    };
    info!("{: <25} {}", "excitations:", pairs);
    debug!("{: <25} {}", "row width:", config.output.row_width);
    info!("{:-^80}", "");
}

pub fn print_report(report: &OccupationReport) {
    for warning in report.warnings.iter() {
        warn!("Warning: {}", warning);
    }
    for channel in [SpinChannel::Up, SpinChannel::Down] {
        info!(
            "{: <25} {:>8.1}",
            format!("{} electrons:", channel),
            report.count(channel)
        );
    }
    info!("{: <25} {:>8.1}", "total electrons:", report.total_count);
    info!("{:^80}", "");
    for channel in [SpinChannel::Up, SpinChannel::Down] {
        let summary = report.summary(channel);
        info!(
            "{} occupied bands [{}] | unoccupied bands [{}]",
            channel, summary.occupied, summary.unoccupied
        );
    }
    info!("{:-^80}", "");
}
