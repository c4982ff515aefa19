use clap::{CommandFactory, Parser, ValueHint};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// classlog - mine a git history into a class-granularity change table
#[derive(Parser, Debug)]
#[command(name = "classlog", version, about, long_about = None)]
pub struct Args {
    /// Path to the repository to mine
    #[arg(value_hint = ValueHint::DirPath, required_unless_present = "completions")]
    pub repository: Option<PathBuf>,

    /// Commit to check out and walk backward from (hash or ref)
    #[arg(required_unless_present = "completions")]
    pub commit: Option<String>,

    /// File the change table is written to
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "completions")]
    pub output: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}

/// Generate shell completions to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Args::command();
    generate(shell, &mut cmd, "classlog", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_positionals_parse() {
        let args = Args::try_parse_from(["classlog", "/repo", "abc123", "out.csv"]).unwrap();
        assert_eq!(args.repository.unwrap(), PathBuf::from("/repo"));
        assert_eq!(args.commit.as_deref(), Some("abc123"));
        assert_eq!(args.output.unwrap(), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Args::try_parse_from(["classlog", "/repo", "abc123"]).is_err());
    }

    #[test]
    fn test_extra_argument_is_rejected() {
        assert!(Args::try_parse_from(["classlog", "/repo", "abc123", "out.csv", "extra"]).is_err());
    }

    #[test]
    fn test_completions_need_no_positionals() {
        let args = Args::try_parse_from(["classlog", "--completions", "bash"]).unwrap();
        assert!(args.completions.is_some());
        assert!(args.repository.is_none());
    }
}
