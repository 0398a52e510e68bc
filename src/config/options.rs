// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

/// Which table to read: tag name plus a whitespace-separated class list.
/// A table matches when it carries every listed class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSelector {
    pub tag: String,
    pub classes: String,
}

impl Default for TableSelector {
    fn default() -> Self {
        Self { tag: s!(TABLE_TAG), classes: s!(TABLE_CLASSES) }
    }
}

impl TableSelector {
    pub fn new(tag: impl Into<String>, classes: impl Into<String>) -> Self {
        Self { tag: tag.into(), classes: classes.into() }
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.classes.split_whitespace().collect()
    }

    /// Display form, e.g. `table.table.table-striped.col-md-12`. Used in
    /// messages only; matching goes through `tag` and `class_list`.
    pub fn to_css(&self) -> String {
        let mut css = s!(self.tag.trim());
        for class in self.classes.split_whitespace() {
            css.push('.');
            css.push_str(class);
        }
        css
    }
}

/// Cell positions within a course row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub code: usize,
    pub name: usize,
    pub credits: usize,
    pub grade: usize,
    /// Rows with fewer cells are skipped.
    pub min_columns: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            code: COL_CODE,
            name: COL_NAME,
            credits: COL_CREDITS,
            grade: COL_GRADE,
            min_columns: MIN_COLUMNS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Saved page source to read.
    pub input: PathBuf,
    pub selector: TableSelector,
    pub layout: ColumnLayout,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PAGE_FILE),
            selector: TableSelector::default(),
            layout: ColumnLayout::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Append "Total Credits" / "GPA" lines after the rows.
    pub include_summary: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            include_summary: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, or the user's own extension if they typed one.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let file = match &self.out_path.ext {
            Some(ext) => join!(&*stem, ".", &ext.to_string_lossy()),
            None => join!(&*stem, ".", self.format.ext()),
        };
        self.out_path.dir.join(file)
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> u8 {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
