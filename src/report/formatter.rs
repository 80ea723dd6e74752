use anyhow::Result;
use std::fmt::{self, Write};

use crate::cli::OutputFormat;
use crate::verifier::{CaseReport, Verdict, VerificationRun};

use super::SolveOutput;

const SEPARATOR: &str = "-----------------------------------------------------------";

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_solve(output: &SolveOutput, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(output)? + "\n"),
            OutputFormat::Text => Ok(Self::solve_text(output)?),
        }
    }

    pub fn format_run(run: &VerificationRun, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(run)? + "\n"),
            OutputFormat::Text => Ok(Self::run_text(run)?),
        }
    }

    fn solve_text(output: &SolveOutput) -> Result<String, fmt::Error> {
        let c = &output.coefficients;
        let mut out = String::new();
        writeln!(out, "equation: {:.8}x^4 + {:.8}x^2 + {:.8} = 0", c.a, c.b, c.c)?;
        writeln!(out, "kind: {}", output.kind.as_str())?;
        if output.count < 0 {
            writeln!(out, "count: {} (infinitely many solutions)", output.count)?;
        } else {
            writeln!(out, "count: {}", output.count)?;
            writeln!(out, "roots: {}", join_roots(&output.roots))?;
        }
        Ok(out)
    }

    fn run_text(run: &VerificationRun) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for report in &run.reports {
            Self::case_text(&mut out, report)?;
        }
        writeln!(
            out,
            "Summary: passed {} / {} tests (some tests intentionally highlight issues).",
            run.passed, run.total
        )?;
        Ok(out)
    }

    fn case_text(out: &mut impl Write, report: &CaseReport) -> fmt::Result {
        let c = &report.case.coefficients;
        writeln!(
            out,
            "Test {}: a={:.8} b={:.8} c={:.8} | expected_n={} | reported_n={} | note: {}",
            report.index, c.a, c.b, c.c, report.case.expected, report.reported, report.case.note
        )?;
        writeln!(out, "   reported roots: {}", join_roots(&report.roots))?;
        match &report.verdict {
            Verdict::Pass => writeln!(out, "   -> OK (satisfies polynomial and expected count)")?,
            Verdict::Fail(reason) => writeln!(out, "   -> FAIL ({reason})")?,
            Verdict::Flagged(defect) => writeln!(
                out,
                "   -> WARNING: {defect} (logical issue). MARK TEST AS FAIL to highlight bug."
            )?,
        }
        writeln!(out, "{SEPARATOR}")
    }
}

fn join_roots(roots: &[f64]) -> String {
    roots
        .iter()
        .map(|x| format!("{x:.8}"))
        .collect::<Vec<_>>()
        .join(" ")
}
