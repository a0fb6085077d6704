use clap::{Arg, ArgAction, Command};

pub const MCR_CMD: &str = "reduce";

pub fn create_mcr_cli() -> Command {
    Command::new(MCR_CMD)
        .about("Compute minimal common regions across sample segments. Input columns: id, chr, start, end. Outputs location, sample count and segment ids.")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .required(true)
                .help("Input table of segments (delimited text, optionally .gz)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .required(false)
                .help("Output table (default: stdout)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .required(false)
                .help("TOML config file. Command line options take precedence"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .short('d')
                .required(false)
                .help("Column delimiter: a single character, `tab` or `comma` (default: tab)"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("The input table has no header row"),
        )
        .arg(
            Arg::new("overlap-target")
                .long("overlap-target")
                .required(false)
                .value_parser(["neighbor", "seed"])
                .help("Intersect the working region with each neighbor (default) or with its seed, as older MCR versions did"),
        )
        .arg(
            Arg::new("label")
                .long("label")
                .required(false)
                .help("Label attached to the result (default: MCR)"),
        )
}
