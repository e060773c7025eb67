use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortest_paths::experiment::{run_all_pairs_experiment, run_single_source_experiment, ExperimentConfig};
use shortest_paths::report::Report;
use std::env;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    SingleSource,
    AllPairs,
    Both,
}

#[derive(Debug)]
struct Options {
    mode: Mode,
    seed: Option<u64>,
    max_size: Option<usize>,
    samples: Option<usize>,
    json: bool,
}

const USAGE: &str =
    "usage: benchmark [single|all-pairs|both] [--seed N] [--max-size N] [--samples N] [--json]";

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        mode: Mode::Both,
        seed: None,
        max_size: None,
        samples: None,
        json: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "single" => options.mode = Mode::SingleSource,
            "all-pairs" => options.mode = Mode::AllPairs,
            "both" => options.mode = Mode::Both,
            "--json" => options.json = true,
            "--seed" => options.seed = Some(parse_value(arg, iter.next())?),
            "--max-size" => options.max_size = Some(parse_value(arg, iter.next())?),
            "--samples" => options.samples = Some(parse_value(arg, iter.next())?),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} expects a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {}: {}", flag, value))
}

fn configure(mut config: ExperimentConfig, options: &Options) -> ExperimentConfig {
    if let Some(max_size) = options.max_size {
        config.max_size = max_size;
    }
    if let Some(samples) = options.samples {
        config.samples = samples;
    }
    config
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        }
    };

    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut report = Report::new(seed);

    if options.mode != Mode::AllPairs {
        let config = configure(ExperimentConfig::default(), &options);
        match run_single_source_experiment(&config, &mut rng) {
            Ok(rows) => report.single_source = rows,
            Err(err) => {
                eprintln!("single-source experiment failed: {}", err);
                process::exit(1);
            }
        }
    }

    if options.mode != Mode::SingleSource {
        let config = configure(ExperimentConfig::all_pairs(), &options);
        match run_all_pairs_experiment(&config, &mut rng) {
            Ok(rows) => report.all_pairs = rows,
            Err(err) => {
                eprintln!("all-pairs experiment failed: {}", err);
                process::exit(1);
            }
        }
    }

    if options.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize report: {}", err);
                process::exit(1);
            }
        }
    } else {
        println!("Seed: {}", report.seed);
        print!("{}", report.render_tables());
    }
}
