use crate::utils::Timer;
use chrono::Local;
use clap::{crate_name, crate_version};
use log::warn;

const LOG_WIDTH: usize = 80;

pub fn write_header() {
    warn!("{: ^LOG_WIDTH$}", "-----------------");
    warn!("{: ^LOG_WIDTH$}", crate_name!().to_uppercase());
    warn!("{: ^LOG_WIDTH$}", "-----------------");
    warn!("{: ^LOG_WIDTH$}", format!("version: {}", crate_version!()));
    warn!("{: ^LOG_WIDTH$}", "");
    warn!("{: ^LOG_WIDTH$}", format!("{::^55}", ""));
    warn!(
        "{: ^LOG_WIDTH$}",
        "::       occupations for spin-polarized ΔSCF        ::"
    );
    warn!("{: ^LOG_WIDTH$}", format!("{::^55}", ""));
    warn!(
        "{: ^LOG_WIDTH$}",
        format!("started at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    );
    warn!("{: ^LOG_WIDTH$}", "");
}

pub fn write_footer(timer: Timer, success: bool) {
    warn!("{:-^LOG_WIDTH$}", "");
    let status: &str = if success {
        "OCCUPATIONS card done"
    } else {
        "no OCCUPATIONS card written"
    };
    warn!("{: <25} {}", "status:", status);
    warn!("{: <25} {:.3} s", "wall time:", timer.elapsed().as_secs_f64());
    warn!("{:-^LOG_WIDTH$}", "");
}
