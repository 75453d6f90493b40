extern crate persistent_rbtree;

use log::{debug, error, info, LevelFilter};
use persistent_rbtree::red_black_tree::RedBlackSet;
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use std::env;
use std::process;
use std::time::Instant;

const USAGE: &str = "usage: persistent-rbtree [--size N] [--range N] [--seed N] [-v]";

#[derive(Debug, PartialEq)]
struct Config {
    size: u32,
    range: u32,
    seed: u32,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 100_000,
            range: 1_000_000,
            seed: 1,
            verbose: false,
        }
    }
}

impl Config {
    fn from_args<I>(args: I) -> Result<Config, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => config.verbose = true,
                "--size" => config.size = parse_value(&arg, args.next())?,
                "--range" => config.range = parse_value(&arg, args.next())?,
                "--seed" => config.seed = parse_value(&arg, args.next())?,
                _ => return Err(format!("unknown argument `{}`", arg)),
            }
        }
        if config.range == 0 {
            return Err(String::from("`--range` must be positive"));
        }
        if config.seed == 0 {
            return Err(String::from("`--seed` must be non-zero"));
        }
        Ok(config)
    }
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for `{}`", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid value `{}` for `{}`", value, flag))
}

fn rng(config: &Config) -> XorShiftRng {
    SeedableRng::from_seed([config.seed, config.seed, config.seed, config.seed])
}

fn report(phase: &str, set: &RedBlackSet<u32>, start: Instant) {
    let elapsed = start.elapsed();
    info!(
        "{}: {} keys in {}.{:06}s",
        phase,
        set.len(),
        elapsed.as_secs(),
        elapsed.subsec_micros()
    );
    debug!("{}: invariants hold: {}", phase, set.is_valid());
}

fn run(config: &Config) {
    let start = Instant::now();
    let mut sequential = RedBlackSet::new();
    for key in 0..config.size {
        sequential = sequential.insert(key);
    }
    report("sequential insert", &sequential, start);

    let mut rng = rng(config);
    let start = Instant::now();
    let mut random = RedBlackSet::new();
    for _ in 0..config.size {
        random = random.insert(rng.gen_range(0, config.range));
    }
    report("random insert", &random, start);

    let start = Instant::now();
    let mut remaining = random.clone();
    for _ in 0..config.size {
        remaining = remaining.remove(&rng.gen_range(0, config.range));
    }
    report("random delete", &remaining, start);

    if !sequential.is_valid() || !random.is_valid() || !remaining.is_valid() {
        error!("Red black invariants violated.");
        process::exit(1);
    }
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}\n{}", message, USAGE);
            process::exit(2);
        },
    };

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(err) = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("error: failed to initialize logging: {}", err);
    }

    debug!("{:?}", config);
    run(&config);
}
