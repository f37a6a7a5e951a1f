// ============================================================================
// dio-cli/src/main.rs
// ============================================================================
//
// MAIN ENTRY POINT: dio command-line application
//
// Parses arguments, sets up logging and dispatches to the subcommand.
// Exit status is 0 when every file succeeded, 1 when any file failed or the
// command could not run at all.

use clap::Parser;
use dio_cli::logging::init_logging;
use dio_cli::{Cli, Commands, output, run_avatar, run_hash, run_silence, run_trim};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Imt(args) => run_trim(args),
        Commands::Sil(args) => run_silence(args),
        Commands::Ihash(args) => run_hash(args),
        Commands::Avatar(args) => run_avatar(args),
    };

    match result {
        Ok(summary) if summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
