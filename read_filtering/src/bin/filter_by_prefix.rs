extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate read_filtering;
use clap::{App, Arg};
use read_filtering::{CaseMode, Config};
use std::path::PathBuf;
fn main() {
    let matches = App::new("filter_by_prefix")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Remove FASTA records whose IDs start with listed prefixes.")
        .arg(
            Arg::with_name("input")
                .required(true)
                .short("i")
                .long("input")
                .value_name("INPUT")
                .help("Sequences to be filtered<FASTA>")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("exclude")
                .required(true)
                .short("e")
                .long("exclude")
                .value_name("EXCLUDE")
                .help("Prefixes of IDs to be removed, one per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("outdir")
                .short("o")
                .long("output_dir")
                .required(false)
                .value_name("OUTPUT_DIRECTORY")
                .help("Output directory. Default: current directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("suffix")
                .long("suffix")
                .required(false)
                .value_name("SUFFIX")
                .help("Appended to the input name to name the output")
                .default_value(read_filtering::config::DEFAULT_SUFFIX)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ignore_case")
                .long("ignore-case")
                .help("Compare IDs and prefixes ignoring ASCII case."),
        )
        .arg(
            Arg::with_name("summary_json")
                .long("summary-json")
                .required(false)
                .value_name("JSON")
                .help("Also write the summary as JSON")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Output debug to the standard error."),
        )
        .get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let mut config = Config::default();
    if let Some(input) = matches.value_of("input") {
        config.input = PathBuf::from(input);
    }
    if let Some(list) = matches.value_of("exclude") {
        config.exclusion_list = PathBuf::from(list);
    }
    config.output_dir = matches.value_of("outdir").map(PathBuf::from);
    if let Some(suffix) = matches.value_of("suffix") {
        config.suffix = suffix.to_string();
    }
    if matches.is_present("ignore_case") {
        config.case_mode = CaseMode::AsciiCaseInsensitive;
    }
    config.summary_json = matches.value_of("summary_json").map(PathBuf::from);
    let timestamp = chrono::Local::now().naive_local();
    match read_filtering::run(&config, timestamp) {
        Ok(report) => {
            for line in report.console_lines() {
                println!("{}", line);
            }
        }
        Err(why) => {
            error!("{}", why);
            std::process::exit(1);
        }
    }
}
