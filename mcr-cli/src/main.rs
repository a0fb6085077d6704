mod mcr;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "mcr";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find minimal common regions shared by overlapping segments from many samples.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output (RUST_LOG overrides this)"),
        )
        .subcommand(mcr::cli::create_mcr_cli())
}

fn init_logger(verbose: bool) {
    let level = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // MINIMAL COMMON REGIONS
        //
        Some((mcr::cli::MCR_CMD, matches)) => {
            mcr::handlers::run_mcr(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
