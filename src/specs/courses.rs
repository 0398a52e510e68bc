// src/specs/courses.rs
//! Course table on the portal's "courses" page.
//!
//! Row shape (default layout, see `ColumnLayout`):
//! `Code | Name | … | Credits | … | … | Grade`, at least 7 `<td>` cells.
//!
//! One pass does extraction and first-pass validity filtering. A row is
//! dropped when it has too few cells, when its credit cell is not a
//! non-negative integer, or when its grade is not countable under the
//! supplied `GradeScale`. Every dropped row comes back as a `SkippedRow` so
//! the caller decides what to log; nothing is logged from here.

use scraper::Html;
use thiserror::Error;

use crate::config::options::{ColumnLayout, TableSelector};
use crate::config::scale::GradeScale;
use crate::core::html::{body_rows, cell_text, find_first_with_classes, parse_selector, row_cells};
use crate::core::sanitize::parse_credits;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("course table `{selector}` not found")]
    TableNotFound { selector: String },
    #[error("invalid table selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// One course row that passed every check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub grade: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Structural; not worth a diagnostic.
    TooFewColumns { found: usize },
    /// Structural; not worth a diagnostic.
    BadCredits { text: String },
    /// Sentinel or unknown grade symbol.
    InvalidGrade { grade: String },
}

impl SkipReason {
    /// Whether the row deserves a diagnostic line (vs. silent skip).
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, SkipReason::InvalidGrade { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based position among the table's body rows.
    pub row_index: usize,
    /// Course name if the row had one.
    pub name: Option<String>,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub rows: Vec<RawRow>,
    pub skipped: Vec<SkippedRow>,
}

pub fn extract(
    html: &str,
    selector: &TableSelector,
    layout: &ColumnLayout,
    scale: &GradeScale,
) -> Result<Extraction, ExtractError> {
    let css = selector.to_css();
    let tag = selector.tag.trim();
    let sel = parse_selector(tag)
        .map_err(|reason| ExtractError::InvalidSelector { selector: s!(tag), reason })?;

    let doc = Html::parse_document(html);
    let table = find_first_with_classes(&doc, &sel, &selector.class_list())
        .ok_or_else(|| ExtractError::TableNotFound { selector: css })?;

    let mut out = Extraction::default();

    for (row_index, tr) in body_rows(table).into_iter().enumerate() {
        let cells: Vec<String> = row_cells(tr).into_iter().map(cell_text).collect();

        match read_row(&cells, layout, scale) {
            Ok(row) => out.rows.push(row),
            Err(reason) => out.skipped.push(SkippedRow {
                row_index,
                name: cells.get(layout.name).cloned(),
                reason,
            }),
        }
    }

    Ok(out)
}

/// Apply the skip rules to one row's cell texts.
fn read_row(cells: &[String], layout: &ColumnLayout, scale: &GradeScale) -> Result<RawRow, SkipReason> {
    let needed = layout
        .min_columns
        .max(layout.code.max(layout.name).max(layout.credits).max(layout.grade) + 1);
    if cells.len() < needed {
        return Err(SkipReason::TooFewColumns { found: cells.len() });
    }

    let credits_text = &cells[layout.credits];
    let credits = parse_credits(credits_text)
        .ok_or_else(|| SkipReason::BadCredits { text: credits_text.clone() })?;

    let grade = &cells[layout.grade];
    if !scale.is_countable(grade) {
        return Err(SkipReason::InvalidGrade { grade: grade.clone() });
    }

    Ok(RawRow {
        code: cells[layout.code].clone(),
        name: cells[layout.name].clone(),
        credits,
        grade: grade.clone(),
    })
}
