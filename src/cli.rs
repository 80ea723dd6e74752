use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::solver::{SolverConfig, TieBreak, ZeroRootPolicy};
use crate::verifier::DEFAULT_TOLERANCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "biquad")]
#[command(about = "Biquadratic solver - real roots of a*x^4 + b*x^2 + c = 0", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE", global = true)]
    pub output_file: Option<PathBuf>,

    /// Report a double y-root only when the discriminant is exactly zero
    #[arg(long, global = true)]
    pub exact_tie_break: bool,

    /// Report a zero y-root as a single x = 0 instead of +0 and -0
    #[arg(long, global = true)]
    pub collapse_zero_roots: bool,

    /// Maximum absolute residual accepted for a reported root (verify)
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, global = true)]
    pub tolerance: f64,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a single equation
    Solve {
        /// Coefficient of x^4
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Coefficient of x^2
        #[arg(allow_negative_numbers = true)]
        b: f64,
        /// Constant term
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Check solver output against a table of expected root counts
    Verify {
        /// Case file or directory of case files (json, yaml). Can be specified multiple times.
        #[arg(long, value_name = "PATH")]
        cases: Vec<PathBuf>,

        /// Skip the built-in regression table
        #[arg(long)]
        no_builtin: bool,

        /// Exit with a non-zero status if any case does not pass
        #[arg(long)]
        strict: bool,
    },
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            anyhow::bail!(
                "Tolerance must be a non-negative finite number: {}",
                self.tolerance
            );
        }
        if let Command::Verify { cases, no_builtin, .. } = &self.command {
            if *no_builtin && cases.is_empty() {
                anyhow::bail!("Nothing to verify: --no-builtin requires at least one --cases path");
            }
            for path in cases {
                if !path.exists() {
                    anyhow::bail!("Case path does not exist: {}", path.display());
                }
            }
        }
        Ok(())
    }

    pub fn solver_config(&self) -> SolverConfig {
        let mut config = SolverConfig::default();
        if self.exact_tie_break {
            config = config.with_tie_break(TieBreak::Exact);
        }
        if self.collapse_zero_roots {
            config = config.with_zero_roots(ZeroRootPolicy::Collapse);
        }
        config
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
