use anyhow::{Context, Result};
use biquad_solver::cases::collect_cases;
use biquad_solver::cli::{self, Command};
use biquad_solver::logging::{self, Verbosity};
use biquad_solver::report::{OutputFormatter, SolveOutput};
use biquad_solver::{Coefficients, Solver, Verifier};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing::debug;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;

    let solver = Solver::new(args.solver_config());
    logging::init(Verbosity::from_flags(args.verbose, args.quiet), solver.config());
    debug!(format = args.format.as_str(), tolerance = args.tolerance, "starting");

    let (rendered, success) = match &args.command {
        Command::Solve { a, b, c } => {
            let coeffs = Coefficients::try_new(*a, *b, *c).context("Invalid coefficients")?;
            let output = SolveOutput::new(coeffs, &solver.solve(coeffs));
            (OutputFormatter::format_solve(&output, args.format)?, true)
        }
        Command::Verify {
            cases,
            no_builtin,
            strict,
        } => {
            let cases = collect_cases(cases, !no_builtin).context("Failed to load cases")?;
            let run = Verifier::new(solver).with_tolerance(args.tolerance).run(&cases);
            let rendered = OutputFormatter::format_run(&run, args.format)?;
            (rendered, !*strict || run.all_passed())
        }
    };

    write_output(&rendered, args.output_file.as_deref())?;

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

fn write_output(rendered: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
