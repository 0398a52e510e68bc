// src/engine/types.rs
use crate::core::sanitize::parse_credits;
use crate::specs::courses::RawRow;

/// What the engine needs from a course row.
///
/// `credits` returns `None` when the row's credit value cannot be read as a
/// non-negative integer; such rows are skipped rather than trusted, since an
/// edit surface may hand over text that never went through extraction.
pub trait GradedCourse {
    fn credits(&self) -> Option<u32>;
    fn grade(&self) -> &str;
}

impl GradedCourse for RawRow {
    fn credits(&self) -> Option<u32> { Some(self.credits) }
    fn grade(&self) -> &str { &self.grade }
}

/// `(credits text, grade)` pairs, as typed into a form.
impl GradedCourse for (&str, &str) {
    fn credits(&self) -> Option<u32> { parse_credits(self.0) }
    fn grade(&self) -> &str { self.1 }
}

impl<T: GradedCourse + ?Sized> GradedCourse for &T {
    fn credits(&self) -> Option<u32> { (**self).credits() }
    fn grade(&self) -> &str { (**self).grade() }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GpaResult {
    /// Sum of credits over countable courses.
    pub total_credits: u64,
    /// Sum of credits × grade points over countable courses.
    pub total_points: f64,
    /// `total_points / total_credits`, or 0.0 with no credits.
    pub gpa: f64,
}

impl GpaResult {
    /// Two decimals. Rust's formatter rounds the exact binary value with
    /// ties to even, so 3.505 (stored as 3.50499…) prints as "3.50".
    pub fn gpa_display(&self) -> String {
        format!("{:.2}", self.gpa)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CourseSkip {
    BadCredits,
    InvalidGrade { grade: String },
}

/// `GpaResult` plus which rows counted and why the others did not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GpaReport {
    pub result: GpaResult,
    /// Input positions that were aggregated, ascending.
    pub counted: Vec<usize>,
    /// `(input position, reason)` for every skipped row, ascending.
    pub skipped: Vec<(usize, CourseSkip)>,
}

impl GpaReport {
    pub fn is_counted(&self, index: usize) -> bool {
        self.counted.binary_search(&index).is_ok()
    }
}
