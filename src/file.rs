// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::config::options::ExportOptions;
use crate::config::scale::{GradeScale, ScaleError};
use crate::courses::CourseRecord;
use crate::engine::GpaReport;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("grade scale: {0}")]
    Scale(#[from] ScaleError),
}

pub const EXPORT_HEADERS: [&str; 5] = ["Code", "Name", "Credits", "Grade", "Points"];

/// Saved page source. Invalid UTF-8 is replaced rather than rejected;
/// browsers occasionally save pages with a stray byte in a footer.
pub fn read_page(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

#[derive(Debug, Deserialize)]
struct ScaleRow {
    grade: String,
    points: f64,
}

/// Load a grade scale from CSV with a `grade,points` header.
pub fn load_scale(path: &Path) -> Result<GradeScale, FileError> {
    let text = fs::read_to_string(path)?;
    parse_scale(&text)
}

pub fn parse_scale(text: &str) -> Result<GradeScale, FileError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for row in reader.deserialize::<ScaleRow>() {
        let row = row?;
        entries.push((row.grade, row.points));
    }
    Ok(GradeScale::new(entries)?)
}

/// Course table (+ optional summary lines) as CSV/TSV text.
/// Points are blank for rows the engine did not count.
pub fn to_export_string(
    export: &ExportOptions,
    courses: &[CourseRecord],
    report: &GpaReport,
    scale: &GradeScale,
) -> Result<String, FileError> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(export.delim())
        .flexible(true)
        .from_writer(Vec::new());

    if export.include_headers {
        w.write_record(EXPORT_HEADERS)?;
    }
    for (i, c) in courses.iter().enumerate() {
        let points = if report.is_counted(i) {
            scale.countable_points(&c.grade).map(|p| format!("{p:.1}")).unwrap_or_default()
        } else {
            s!()
        };
        let credits = c.credits.to_string();
        w.write_record([c.code.as_str(), c.name.as_str(), credits.as_str(), c.grade.as_str(), points.as_str()])?;
    }
    if export.include_summary {
        let credits = report.result.total_credits.to_string();
        let gpa = report.result.gpa_display();
        w.write_record(["Total Credits", credits.as_str()])?;
        w.write_record(["GPA", gpa.as_str()])?;
    }

    let buf = w.into_inner().map_err(|e| e.into_error())?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Write the export to `export.out_path()`, creating the directory.
pub fn write_export(
    export: &ExportOptions,
    courses: &[CourseRecord],
    report: &GpaReport,
    scale: &GradeScale,
) -> Result<PathBuf, FileError> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    let contents = to_export_string(export, courses, report, scale)?;
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scale_reads_header_and_rows() {
        let s = parse_scale("grade,points\nH, 4.0\nP,2.5\nF,0\n").unwrap();
        assert_eq!(s.points("H"), Some(4.0));
        assert_eq!(s.points("P"), Some(2.5));
        assert!(s.is_countable("F"));
    }

    #[test]
    fn parse_scale_validates() {
        let err = parse_scale("grade,points\nA,5\n").unwrap_err();
        assert!(matches!(err, FileError::Scale(ScaleError::OutOfRange { .. })));

        let err = parse_scale("grade,points\nA,high\n").unwrap_err();
        assert!(matches!(err, FileError::Csv(_)));
    }
}
