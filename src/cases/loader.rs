use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::TestCase;
use crate::error::CaseFileError;
use crate::solver::RootCount;

const CASE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Debug, Deserialize)]
struct CaseFile {
    #[allow(dead_code)]
    #[serde(default)]
    version: Option<String>,
    cases: Vec<RawCase>,
}

#[derive(Debug, Deserialize)]
struct RawCase {
    a: f64,
    b: f64,
    c: f64,
    expected: i64,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseFormat {
    Json,
    Yaml,
}

impl CaseFormat {
    fn detect(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Load cases from a single JSON or YAML file.
pub fn load_case_file<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>, CaseFileError> {
    let path = path.as_ref();
    trace!(path = %path.display(), "loading case file");

    let format =
        CaseFormat::detect(path).ok_or_else(|| CaseFileError::unsupported_format(path))?;

    let content = fs::read_to_string(path).map_err(|e| CaseFileError::read_error(path, e))?;

    let file: CaseFile = match format {
        CaseFormat::Json => serde_json::from_str(&content)
            .map_err(|e| CaseFileError::parse_error(path, e.to_string()))?,
        CaseFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| CaseFileError::parse_error(path, e.to_string()))?,
    };

    let cases = file
        .cases
        .into_iter()
        .map(|raw| {
            let expected = i32::try_from(raw.expected)
                .ok()
                .and_then(RootCount::from_i32)
                .ok_or_else(|| CaseFileError::invalid_expected(path, raw.expected))?;
            Ok(TestCase::new(raw.a, raw.b, raw.c, expected, raw.note))
        })
        .collect::<Result<Vec<_>, CaseFileError>>()?;

    debug!(path = %path.display(), count = cases.len(), "loaded cases");
    Ok(cases)
}

/// Load cases from a file, or from every case file under a directory.
/// Directory entries are visited in sorted order; hidden entries and files
/// with other extensions are skipped.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>, CaseFileError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return load_case_file(path);
    }

    let mut cases = Vec::new();
    for file in walk_case_files(path)? {
        cases.extend(load_case_file(&file)?);
    }
    Ok(cases)
}

fn walk_case_files(root: &Path) -> Result<Vec<PathBuf>, CaseFileError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry.map_err(|e| CaseFileError::DirectoryScanError {
            path: root.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let is_case_file = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CASE_EXTENSIONS.contains(&ext));

        if is_case_file {
            files.push(entry.into_path());
        } else {
            warn!(path = %entry.path().display(), "skipping non-case file");
        }
    }

    Ok(files)
}
