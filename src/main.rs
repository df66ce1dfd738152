use crate::defaults::CONFIG_FILE_NAME;
use crate::io::{print_report, read_input, write_footer, write_header, Configuration};
use crate::occupations::write_occupations;
use crate::utils::Timer;
use clap::{Arg, Command};
use env_logger::Builder;
use log::{error, info, LevelFilter};
use std::io::Write;
use std::path::Path;
use std::process;

mod defaults;
mod io;
mod occupations;
mod utils;

#[macro_use]
extern crate clap;

fn main() {
    // Input.
    let matches = Command::new(crate_name!())
        .version(crate_version!())
        .about("writes the OCCUPATIONS card of spin-polarized ΔSCF calculations")
        .arg(
            Arg::new("config-File")
                .help("Sets the configuration file to use")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Overrides the name of the written occupations file")
                .short('o')
                .long("output")
                .takes_value(true),
        )
        .get_matches();
    // Without a configuration file the default settings are used and written to
    // the working directory.
    let config_file: &str = matches.value_of("config-File").unwrap_or(CONFIG_FILE_NAME);
    let mut config: Configuration = match read_input(Path::new(config_file)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:?}", err);
            process::exit(1);
        }
    };
    if let Some(output) = matches.value_of("output") {
        config.output.filename = String::from(output);
    }

    // Logging.
    // The log level is set.
    let log_level: LevelFilter = match config.verbose {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    // and the logger is build.
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log_level)
        .init();

    // The program header is written to the command line.
    write_header();
    // and the total wall-time timer is started.
    let timer: Timer = Timer::start();

    let status: i32 = match write_occupations(&config) {
        Ok(report) => {
            print_report(&report);
            info!("{}", timer);
            0
        }
        Err(err) => {
            error!("Error: {:?}", err);
            1
        }
    };

    // Finished.
    write_footer(timer, status == 0);
    process::exit(status);
}
