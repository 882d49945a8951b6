use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::Rng;

use crate::{
    error::{Result, check_dimensions},
    generators::Generator,
};

/// Which generator to run for each maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    OriginShift,
    Backtracking,
    BinaryTree,
    /// A fresh random pick for every maze
    Random,
}

impl AlgorithmChoice {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> Generator {
        match self {
            AlgorithmChoice::OriginShift => Generator::OriginShift,
            AlgorithmChoice::Backtracking => Generator::Backtracking,
            AlgorithmChoice::BinaryTree => Generator::BinaryTree,
            AlgorithmChoice::Random => Generator::random(rng),
        }
    }
}

/// Generate perfect mazes and draw them in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "mazegen", version, about)]
pub struct Config {
    /// Maze width in cells
    #[arg(short = 'W', long, default_value_t = 30)]
    pub width: u16,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = 20)]
    pub height: u16,

    /// Generation algorithm
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Random)]
    pub algorithm: AlgorithmChoice,

    /// Root moves for origin shift (default: 20 per cell)
    #[arg(long)]
    pub steps: Option<u64>,

    /// Seed for reproducible mazes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print walls without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Directory for the log file (default: the system temp directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Maximum level written to the log file
    #[arg(long, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 30,
            height: 20,
            algorithm: AlgorithmChoice::Random,
            steps: None,
            seed: None,
            count: 1,
            no_color: false,
            log_dir: None,
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    /// Reject settings that cannot produce a maze, before any work starts.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MazeError, generators::get_rng};

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Config::parse_from(["mazegen"]);
        let default = Config::default();
        assert_eq!(parsed.width, default.width);
        assert_eq!(parsed.height, default.height);
        assert_eq!(parsed.algorithm, default.algorithm);
        assert_eq!(parsed.count, default.count);
        assert_eq!(parsed.log_level, default.log_level);
        assert!(parsed.steps.is_none() && parsed.seed.is_none());
    }

    #[test]
    fn test_parse_arguments() {
        let config = Config::parse_from([
            "mazegen",
            "-W",
            "12",
            "--height",
            "7",
            "--algorithm",
            "binary-tree",
            "--seed",
            "9",
            "--steps",
            "100",
            "-n",
            "3",
            "--no-color",
            "--log-level",
            "debug",
        ]);
        assert_eq!((config.width, config.height), (12, 7));
        assert_eq!(config.algorithm, AlgorithmChoice::BinaryTree);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.steps, Some(100));
        assert_eq!(config.count, 3);
        assert!(config.no_color);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_pick_fixed_algorithm() {
        let mut rng = get_rng(Some(0));
        for _ in 0..10 {
            assert_eq!(
                AlgorithmChoice::Backtracking.pick(&mut rng),
                Generator::Backtracking
            );
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
