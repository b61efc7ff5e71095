use crate::cli::args::Config;
use crate::cli::terminal::{colors, failed_indicator, separator, success_indicator, warning_indicator};
use crate::crypto::Error;
use crate::runner::{RunStats, SeedOutcome, SeedReport};
use crate::validation::MatchResult;
use num_format::{Locale, ToFormattedString};
use serde_json::{Value, json};
use std::io::{self, Write};

/// Commentary printed after every report
pub const NOTES: &[&str] = &[
    "The points used by the PAKE are fixed constants",
    "They were generated offline with a deterministic, seed-based method",
    "The recorded constants are reproduced by treating the scalar as an Ed25519 secret key",
    "Seed and round count are public, so nobody chose the points' discrete logs",
];

const MISMATCH_HINT: &[&str] = &[
    "This is expected when the derivation differs from the one that",
    "produced the recorded value (hash, round count or mapping)",
];

pub fn write_header<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(out, "{}", colors::blue("Ed25519 Point Generation"))?;
    writeln!(out, "{}", separator())?;
    writeln!(
        out,
        "{} {} {} {} {} {}",
        colors::gray("Rounds:"),
        config.rounds.to_formatted_string(&Locale::en),
        colors::gray("Mapping:"),
        config.mapping.curve().name(),
        colors::gray("Seeds:"),
        config.entries.len()
    )
}

pub fn write_seed_report<W: Write>(out: &mut W, report: &SeedReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Seed: '{}'", colors::bright_yellow(&report.seed))?;
    writeln!(out, "  {} Scalar (hex): {}", colors::gray("└"), report.scalar.to_hex())?;
    writeln!(out, "  {} Point as integer: {}", colors::gray("└"), report.point.to_biguint())?;
    writeln!(out, "  {} Point as bytes (hex): {}", colors::gray("└"), report.point.to_hex())?;
    writeln!(out, "  {} Expected: {}", colors::gray("└"), report.expected)?;

    let subgroup = if report.point.is_torsion_free() {
        colors::green("yes")
    } else {
        colors::red("no")
    };
    writeln!(out, "  {} Prime-order subgroup: {subgroup}", colors::gray("└"))?;

    match report.result {
        MatchResult::Match => writeln!(
            out,
            "{} {}",
            success_indicator(),
            colors::green("MATCH: Generated point matches the recorded value")
        ),
        MatchResult::Mismatch => {
            writeln!(out, "{} {}", failed_indicator(), colors::red("MISMATCH: Points do not match"))?;
            for line in MISMATCH_HINT {
                writeln!(out, "  {}", colors::gray(line))?;
            }
            Ok(())
        }
    }
}

pub fn write_seed_error<W: Write>(out: &mut W, seed: &str, error: &Error) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}: seed '{}': {error}",
        warning_indicator(),
        colors::red("ERROR"),
        seed
    )
}

pub fn write_summary<W: Write>(out: &mut W, stats: &RunStats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {} {} {} {} {}",
        colors::gray("Matches:"),
        stats.matches,
        colors::gray("Mismatches:"),
        stats.mismatches,
        colors::gray("Errors:"),
        stats.errors
    )
}

pub fn write_notes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Notes:")?;
    for note in NOTES {
        writeln!(out, "- {note}")?;
    }
    Ok(())
}

fn outcome_json(outcome: &SeedOutcome) -> Value {
    match &outcome.report {
        Ok(report) => json!({
            "seed": report.seed,
            "scalar": report.scalar.to_hex(),
            "point": report.point.to_biguint().to_string(),
            "point_hex": report.point.to_hex(),
            "expected": report.expected.to_string(),
            "prime_order": report.point.is_torsion_free(),
            "match": report.result.is_match(),
        }),
        Err(error) => json!({
            "seed": outcome.seed,
            "error": error.to_string(),
        }),
    }
}

pub fn report_json(config: &Config, outcomes: &[SeedOutcome]) -> Value {
    let stats = RunStats::from_outcomes(outcomes);
    json!({
        "rounds": config.rounds,
        "mapping": config.mapping.curve().name(),
        "results": outcomes.iter().map(outcome_json).collect::<Vec<_>>(),
        "summary": {
            "matches": stats.matches,
            "mismatches": stats.mismatches,
            "errors": stats.errors,
        },
        "notes": NOTES,
    })
}

/// Write the full text report. Per-seed errors go to `err`.
pub fn write_report<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    config: &Config,
    outcomes: &[SeedOutcome],
) -> io::Result<()> {
    write_header(out, config)?;
    for outcome in outcomes {
        match &outcome.report {
            Ok(report) => write_seed_report(out, report)?,
            Err(error) => write_seed_error(err, &outcome.seed, error)?,
        }
    }
    write_summary(out, &RunStats::from_outcomes(outcomes))?;
    write_notes(out)
}

pub fn display_report(config: &Config, outcomes: &[SeedOutcome]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = if config.json {
        serde_json::to_string_pretty(&report_json(config, outcomes))
            .map_err(io::Error::from)
            .and_then(|text| writeln!(out, "{text}"))
    } else {
        write_report(&mut out, &mut io::stderr(), config, outcomes)
    };

    if let Err(e) = written.and_then(|_| out.flush()) {
        eprintln!("{}: failed to write report: {e}", colors::red("ERROR"));
    }
}
