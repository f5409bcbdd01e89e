// imgresize/src/cli.rs
use crate::core::ResizeAlgorithm;
use clap::{Parser, ValueEnum};

/// Interactive image resizer. All resize parameters are asked for on the
/// console; the flags only tune logging and the resampling filter.
#[derive(Parser, Debug)]
#[command(name = "imgresize", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = Algorithm::Lanczos3)]
    pub filter: Algorithm,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_needed() {
        let cli = Cli::try_parse_from(["imgresize"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.filter, Algorithm::Lanczos3);
    }

    #[test]
    fn test_filter_flag() {
        let cli = Cli::try_parse_from(["imgresize", "-v", "--filter", "bicubic"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(ResizeAlgorithm::from(cli.filter), ResizeAlgorithm::Bicubic);
    }
}
