use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_t, App, Arg, ArgMatches,
};
use fsgm::{
    config::{Config, DEFAULT_LABEL_BOUND},
    data::read_records,
    miner::Session,
};
use std::error::Error;

fn handle_mine(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    let max_edges = if matches.is_present("max-edges") {
        Some(value_t!(matches, "max-edges", usize)?)
    } else {
        None
    };
    let config = Config::new(value_t!(matches, "min-support", f64)?)
        .label_bound(value_t!(matches, "label-bound", usize)?)
        .max_pattern_edges(max_edges);
    let records = read_records(matches.value_of("INPUT").unwrap())?;
    let session = Session::new(records, config)?;
    let mined = session.mine();
    println!("mined {} frequent subgraphs", mined.patterns().len());
    for (i, pattern) in mined.patterns().iter().enumerate() {
        println!("t # {}", i);
        if matches.is_present("ranks") {
            print!("{}", pattern);
        } else {
            print!("{}", session.ranking().restore(pattern));
        }
    }
    eprintln!("{}", mined.stats());
    eprintln!("elapsed_time: {}", start_time.elapsed().as_millis());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let label_bound = DEFAULT_LABEL_BOUND.to_string();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("INPUT")
                .help("Graph collection in `t # / v / e` line format")
                .required(true),
        )
        .arg(
            Arg::with_name("min-support")
                .help("Minimum support rate in (0, 1]")
                .long("min-support")
                .takes_value(true)
                .default_value("0.3"),
        )
        .arg(
            Arg::with_name("label-bound")
                .help("Node and edge labels must be below this bound")
                .long("label-bound")
                .takes_value(true)
                .default_value(&label_bound),
        )
        .arg(
            Arg::with_name("max-edges")
                .help("Stops growing patterns at this many edges")
                .long("max-edges")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ranks")
                .help("Prints frequency ranks instead of the original labels")
                .long("ranks")
                .takes_value(false),
        )
        .get_matches();
    handle_mine(&matches)
}
