use seedpoints::cli::{
    args::parse_and_validate_args,
    display::display_report,
    terminal::enable_ansi_support,
};
use seedpoints::runner::run_pipeline;

fn main() {
    // Enable ANSI color support on Windows
    enable_ansi_support();

    let config = parse_and_validate_args();

    let outcomes = run_pipeline(&config.entries, config.mapping.curve(), config.rounds);

    // Mismatches and per-seed errors are part of the report, not a failed run
    display_report(&config, &outcomes);
}
