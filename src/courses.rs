// src/courses.rs
//
// The editable course list. Whoever holds a `CourseList` owns the current
// truth; the GPA engine only borrows it.
//
// - `CourseRecord`: one course, as extracted or as typed in.
// - `CourseList`: ordered records plus the edit operations. Every edit is
//   validated first; a rejected edit leaves the list exactly as it was.
// - `apply`: edit + fresh `compute_gpa`, the only way the GUI mutates.

use thiserror::Error;

use crate::config::scale::GradeScale;
use crate::core::sanitize::parse_credits;
use crate::engine::{self, GpaReport, GpaResult, GradedCourse};
use crate::specs::courses::RawRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub grade: String,
}

impl CourseRecord {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        grade: impl Into<String>,
    ) -> Self {
        Self { code: code.into(), name: name.into(), credits, grade: grade.into() }
    }
}

impl From<RawRow> for CourseRecord {
    fn from(r: RawRow) -> Self {
        Self { code: r.code, name: r.name, credits: r.credits, grade: r.grade }
    }
}

impl GradedCourse for CourseRecord {
    fn credits(&self) -> Option<u32> { Some(self.credits) }
    fn grade(&self) -> &str { &self.grade }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Code,
    Name,
    Credits,
    Grade,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Code, Field::Name, Field::Credits, Field::Grade];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Code => "Code",
            Field::Name => "Name",
            Field::Credits => "Credits",
            Field::Grade => "Grade",
        }
    }
}

/// Rejected edit input. The list is unchanged when one of these comes back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("course name must not be empty")]
    EmptyName,
    #[error("credits must be a whole number, got {text:?}")]
    BadCredits { text: String },
    #[error("no course at row {index} (list has {len})")]
    NoSuchRow { index: usize, len: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Add { name: String, credits: String, grade: String },
    Remove { index: usize },
    Set { index: usize, field: Field, value: String },
    Replace(Vec<CourseRecord>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseList {
    rows: Vec<CourseRecord>,
}

impl From<Vec<CourseRecord>> for CourseList {
    fn from(rows: Vec<CourseRecord>) -> Self { Self { rows } }
}

impl FromIterator<RawRow> for CourseList {
    fn from_iter<I: IntoIterator<Item = RawRow>>(iter: I) -> Self {
        Self { rows: iter.into_iter().map(CourseRecord::from).collect() }
    }
}

impl CourseList {
    pub fn new() -> Self { Self::default() }

    pub fn as_slice(&self) -> &[CourseRecord] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn get(&self, index: usize) -> Option<&CourseRecord> { self.rows.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> { self.rows.iter() }

    /// Append a course typed into the add form.
    pub fn add_course(&mut self, name: &str, credits: &str, grade: &str) -> Result<usize, EditError> {
        let name = checked_name(name)?;
        let credits = checked_credits(credits)?;
        self.rows.push(CourseRecord::new("", name, credits, grade.trim()));
        Ok(self.rows.len() - 1)
    }

    pub fn remove_course(&mut self, index: usize) -> Result<CourseRecord, EditError> {
        self.check_index(index)?;
        Ok(self.rows.remove(index))
    }

    /// Set one field from text. Grades are stored as typed (trimmed); an
    /// uncountable grade is legal, it just stops counting.
    pub fn edit_field(&mut self, index: usize, field: Field, value: &str) -> Result<(), EditError> {
        self.check_index(index)?;
        // Validate before touching the row
        match field {
            Field::Code => self.rows[index].code = s!(value.trim()),
            Field::Name => self.rows[index].name = s!(checked_name(value)?),
            Field::Credits => self.rows[index].credits = checked_credits(value)?,
            Field::Grade => self.rows[index].grade = s!(value.trim()),
        }
        Ok(())
    }

    pub fn replace_all(&mut self, rows: Vec<CourseRecord>) {
        self.rows = rows;
    }

    /// Current GPA, recomputed from scratch.
    pub fn gpa(&self, scale: &GradeScale) -> GpaResult {
        engine::compute_gpa(&self.rows, scale)
    }

    pub fn report(&self, scale: &GradeScale) -> GpaReport {
        engine::evaluate(&self.rows, scale)
    }

    /// Perform one edit and hand back the recomputed GPA.
    pub fn apply(&mut self, edit: Edit, scale: &GradeScale) -> Result<GpaResult, EditError> {
        match edit {
            Edit::Add { name, credits, grade } => { self.add_course(&name, &credits, &grade)?; }
            Edit::Remove { index } => { self.remove_course(index)?; }
            Edit::Set { index, field, value } => self.edit_field(index, field, &value)?,
            Edit::Replace(rows) => self.replace_all(rows),
        }
        Ok(self.gpa(scale))
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(EditError::NoSuchRow { index, len: self.rows.len() })
        }
    }
}

/// Text of a field, as the table shows it.
pub fn field_text(c: &CourseRecord, field: Field) -> String {
    match field {
        Field::Code => c.code.clone(),
        Field::Name => c.name.clone(),
        Field::Credits => c.credits.to_string(),
        Field::Grade => c.grade.clone(),
    }
}

fn checked_name(name: &str) -> Result<&str, EditError> {
    let name = name.trim();
    if name.is_empty() { Err(EditError::EmptyName) } else { Ok(name) }
}

fn checked_credits(text: &str) -> Result<u32, EditError> {
    parse_credits(text).ok_or_else(|| EditError::BadCredits { text: s!(text) })
}
