// src/runner.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    config::{options::ExtractOptions, scale::GradeScale},
    courses::CourseList,
    engine::GpaResult,
    file,
    specs::courses::{self as spec, ExtractError, SkipReason, SkippedRow},
};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Everything one page run produces.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub courses: CourseList,
    pub skipped: Vec<SkippedRow>,
    pub result: GpaResult,
}

/// Page text → course list → GPA. Only a missing table stops the run;
/// dropped rows are logged and carried in the summary.
pub fn run_html(html: &str, opts: &ExtractOptions, scale: &GradeScale) -> Result<RunSummary, ExtractError> {
    let extraction = match spec::extract(html, &opts.selector, &opts.layout, scale) {
        Ok(ex) => ex,
        Err(e) => {
            loge!("Extract: {e}");
            return Err(e);
        }
    };

    for s in &extraction.skipped {
        log_skip(s);
    }

    let courses: CourseList = extraction.rows.into_iter().collect();
    let result = courses.gpa(scale);

    logf!(
        "Extract: OK courses={}, skipped={}, credits={}, gpa={}",
        courses.len(),
        extraction.skipped.len(),
        result.total_credits,
        result.gpa_display()
    );

    Ok(RunSummary { courses, skipped: extraction.skipped, result })
}

/// Read a saved page from disk and run it.
pub fn run_file(path: &Path, opts: &ExtractOptions, scale: &GradeScale) -> Result<RunSummary, RunError> {
    logf!("Run: reading {}", path.display());
    let html = file::read_page(path).map_err(|source| {
        loge!("Run: cannot read {}: {source}", path.display());
        RunError::Read { path: path.to_path_buf(), source }
    })?;
    Ok(run_html(&html, opts, scale)?)
}

fn log_skip(s: &SkippedRow) {
    let name = s.name.as_deref().unwrap_or("?");
    let detail = match &s.reason {
        SkipReason::InvalidGrade { grade } => format!("{name:?} with invalid grade {grade:?}"),
        SkipReason::TooFewColumns { found } => format!("has {found} column(s)"),
        SkipReason::BadCredits { text } => format!("{name:?} credits {text:?} not a number"),
    };
    if s.reason.is_diagnostic() {
        logw!("Skip: row {} {}", s.row_index, detail);
    } else {
        logd!("Skip: row {} {}", s.row_index, detail);
    }
}
