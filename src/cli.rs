//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one terminal.
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// Log file (overrides the configuration).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["strictly_tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("strictly_tictactoe.toml"));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["strictly_tictactoe", "-c", "alt.toml", "--log-file", "x.log"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
    }
}
