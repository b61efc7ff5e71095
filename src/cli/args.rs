use clap::{Arg, ArgAction, Command};
use crate::cli::terminal::colors;
use crate::crypto::{ClampedBaseMul, CurveOps, Ed25519KeyExpansion};
use crate::points::{self, SeedEntry};
use crate::validation::parse_expected_point;
use std::ffi::OsString;

/// How a derived scalar becomes a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// Scalar taken as an Ed25519 secret key
    Ed25519Key,
    /// Scalar multiplied into the base point as is
    ClampedBase,
}

impl Mapping {
    pub const NAMES: [&'static str; 2] = ["ed25519-key", "clamped-base"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ed25519-key" => Some(Mapping::Ed25519Key),
            "clamped-base" => Some(Mapping::ClampedBase),
            _ => None,
        }
    }

    pub fn curve(&self) -> &'static dyn CurveOps {
        match self {
            Mapping::Ed25519Key => &Ed25519KeyExpansion,
            Mapping::ClampedBase => &ClampedBaseMul,
        }
    }
}

/// `HASH_ROUNDS` as clap's default value
const DEFAULT_ROUNDS: &str = "1000";

#[derive(Debug, Clone)]
pub struct Config {
    pub entries: Vec<SeedEntry>,
    pub mapping: Mapping,
    pub rounds: u32,
    pub json: bool,
}

fn build_cli() -> Command {
    Command::new("seedpoints")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive fixed Edwards25519 points from public seed strings\n\nEach seed is hashed with SHA-256, clamped, mapped to a point and checked against its recorded value")
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_name("SEED")
                .help("Seed to derive (repeatable). Replaces the built-in croc1/croc2 table")
                .value_parser(clap::value_parser!(OsString))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("expected")
                .long("expected")
                .short('e')
                .value_name("INTEGER")
                .help("Recorded point for the seed at the same position, as a decimal integer. Optional for built-in seeds")
                .action(ArgAction::Append)
                .requires("seed"),
        )
        .arg(
            Arg::new("mapping")
                .long("mapping")
                .short('m')
                .value_name("MAPPING")
                .help("Scalar-to-point mapping: ed25519-key (scalar as Ed25519 secret key) or clamped-base (scalar * B)")
                .value_parser(Mapping::NAMES)
                .default_value("ed25519-key"),
        )
        .arg(
            Arg::new("rounds")
                .long("rounds")
                .short('r')
                .value_name("COUNT")
                .help("Number of SHA-256 rounds applied to each seed")
                .value_parser(clap::value_parser!(u32))
                .default_value(DEFAULT_ROUNDS),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn exit_with_error(msg: &str) -> ! {
    eprintln!("{}: {msg}", colors::red("ERROR"));
    std::process::exit(1);
}

/// Pair `--seed` values with `--expected` values by position. Built-in seeds
/// fall back to their recorded point when no value is given for them.
pub fn build_entries(seeds: &[OsString], expected: &[String]) -> Result<Vec<SeedEntry>, String> {
    if seeds.is_empty() {
        return Ok(points::default_entries());
    }

    if expected.len() > seeds.len() {
        return Err(format!(
            "Got {} --expected values for {} --seed values",
            expected.len(),
            seeds.len()
        ));
    }

    seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let expected = match expected.get(i) {
                Some(value) => parse_expected_point(value)?,
                None => seed
                    .to_str()
                    .and_then(points::find_known_seed)
                    .map(|known| SeedEntry::from(known).expected)
                    .ok_or_else(|| {
                        format!(
                            "Seed '{}' is not a built-in seed, pass --expected for it",
                            seed.to_string_lossy()
                        )
                    })?,
            };
            Ok(SeedEntry::new(seed.clone(), expected))
        })
        .collect()
}

pub fn parse_and_validate_args() -> Config {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().get_matches_from(args);

    let rounds = *matches.get_one::<u32>("rounds").unwrap();
    if rounds == 0 {
        exit_with_error("Round count must be at least 1");
    }

    let mapping = matches
        .get_one::<String>("mapping")
        .and_then(|name| Mapping::from_name(name))
        .unwrap_or(Mapping::Ed25519Key);

    let seeds: Vec<OsString> = matches
        .get_many::<OsString>("seed")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let expected: Vec<String> = matches
        .get_many::<String>("expected")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let entries = build_entries(&seeds, &expected).unwrap_or_else(|e| exit_with_error(&e));

    Config {
        entries,
        mapping,
        rounds,
        json: matches.get_flag("json"),
    }
}
