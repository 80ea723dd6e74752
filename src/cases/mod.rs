mod loader;
mod table;

pub use loader::{load_case_file, load_cases};
pub use table::{builtin_cases, TestCase};

use std::path::PathBuf;

use crate::error::Result;

/// Built-in table (optionally) followed by cases from each path, in order.
pub fn collect_cases(paths: &[PathBuf], include_builtin: bool) -> Result<Vec<TestCase>> {
    let mut cases = if include_builtin {
        builtin_cases()
    } else {
        Vec::new()
    };
    for path in paths {
        cases.extend(load_cases(path)?);
    }
    Ok(cases)
}
