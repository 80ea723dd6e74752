use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use crate::solver::{SolverConfig, TieBreak, ZeroRootPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("biquad_solver={level},biquad={level}")
    }
}

/// Install the global subscriber and record the solver configuration the run
/// uses. Logs go to stderr so stdout stays clean for results. `RUST_LOG` takes
/// precedence over the flags.
pub fn init(verbosity: Verbosity, config: &SolverConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    match verbosity {
        Verbosity::Quiet => subscriber.with_writer(std::io::sink).init(),
        Verbosity::Normal => subscriber.without_time().init(),
        _ => subscriber.init(),
    }

    info!(config = %describe(config), "solver configured");
}

/// One-line summary of a solver configuration, e.g.
/// `tie_break=discriminant(4) zero_roots=preserve`.
pub fn describe(config: &SolverConfig) -> String {
    let tie_break = match config.tie_break {
        TieBreak::Exact => "exact".to_string(),
        TieBreak::Discriminant { factor } => format!("discriminant({factor})"),
    };
    let zero_roots = match config.zero_roots {
        ZeroRootPolicy::Preserve => "preserve",
        ZeroRootPolicy::Collapse => "collapse",
    };
    format!("tie_break={tie_break} zero_roots={zero_roots}")
}
