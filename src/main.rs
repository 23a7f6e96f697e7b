use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mindfield::{Config, Quiz};

#[derive(Parser, Debug)]
#[command(version, about = "Terminal trivia: one wrong answer and you're out", long_about = None)]
struct Args {
    /// Base URL of the jService-compatible trivia API
    #[arg(long, env = "MINDFIELD_API_URL", default_value = mindfield::DEFAULT_API_URL)]
    api_url: String,

    /// File that stores the best score
    #[arg(long, env = "MINDFIELD_SCORE_FILE", default_value = mindfield::DEFAULT_SCORE_FILE)]
    score_file: PathBuf,

    /// Random draws allowed when looking for a category not yet played
    #[arg(
        long,
        env = "MINDFIELD_MAX_ATTEMPTS",
        default_value_t = mindfield::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: u32,

    /// Seconds before a trivia request is abandoned
    #[arg(long, env = "MINDFIELD_TIMEOUT_SECS", default_value_t = mindfield::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "MINDFIELD_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Seed for the question order
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            api_url: args.api_url,
            score_file: args.score_file,
            max_attempts: args.max_attempts,
            request_timeout: Duration::from_secs(args.timeout_secs),
            log_file: args.log_file,
            seed: args.seed,
        }
    }
}

#[tokio::main]
async fn main() {
    let config = Config::from(Args::parse());

    let result = match Quiz::from_config(&config) {
        Ok(quiz) => quiz.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_library_config() {
        let args = Args::try_parse_from(["mindfield"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.api_url, Config::default().api_url);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(Args::try_parse_from(["mindfield", "--max-attempts", "0"]).is_err());
    }
}
