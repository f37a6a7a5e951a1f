// dio-cli/src/lib.rs
//
// Library portion of the dio CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{AvatarArgs, Cli, Commands, HashArgs, SilenceArgs, TrimArgs};
pub use commands::BatchSummary;
pub use commands::avatar::run_avatar;
pub use commands::hash::run_hash;
pub use commands::silence::run_silence;
pub use commands::trim::run_trim;
pub use error::{CliErrorContext, CliResult};
