// src/config/scale.rs
//! Grade symbol → grade-point mapping.
//!
//! A `GradeScale` is built once (default table or a loaded CSV) and then
//! passed by reference to both the table extractor and the GPA engine, so
//! the two always agree on which grades count.

use thiserror::Error;

use super::consts::{DEFAULT_SCALE, DEFAULT_SENTINELS, MAX_POINTS, MIN_POINTS};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    #[error("grade scale has no entries")]
    Empty,
    #[error("grade scale entry {index} has an empty symbol")]
    EmptySymbol { index: usize },
    #[error("grade symbol {symbol:?} appears more than once")]
    DuplicateSymbol { symbol: String },
    #[error("grade {symbol:?} maps to {points}, outside [0.0, 4.0]")]
    OutOfRange { symbol: String, points: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradeScale {
    // Kept in declaration order so the GUI can offer symbols best-first.
    entries: Vec<(String, f64)>,
    sentinels: Vec<String>,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SCALE.iter().map(|&(g, p)| (s!(g), p)).collect(),
            sentinels: DEFAULT_SENTINELS.iter().map(|&g| s!(g)).collect(),
        }
    }
}

impl GradeScale {
    /// Validate and build a scale with the default sentinel set.
    pub fn new<I, S>(entries: I) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let entries: Vec<(String, f64)> =
            entries.into_iter().map(|(g, p)| (g.into(), p)).collect();

        if entries.is_empty() {
            return Err(ScaleError::Empty);
        }
        for (index, (symbol, points)) in entries.iter().enumerate() {
            if symbol.is_empty() {
                return Err(ScaleError::EmptySymbol { index });
            }
            if entries[..index].iter().any(|(g, _)| g == symbol) {
                return Err(ScaleError::DuplicateSymbol { symbol: symbol.clone() });
            }
            // NaN fails both comparisons
            if !(*points >= MIN_POINTS && *points <= MAX_POINTS) {
                return Err(ScaleError::OutOfRange { symbol: symbol.clone(), points: *points });
            }
        }

        Ok(Self {
            entries,
            sentinels: DEFAULT_SENTINELS.iter().map(|&g| s!(g)).collect(),
        })
    }

    /// Replace the sentinel set (grades that never count).
    pub fn with_sentinels<I, S>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sentinels = sentinels.into_iter().map(Into::into).collect();
        self
    }

    /// Points for a symbol. Case-sensitive; sentinels are not consulted.
    pub fn points(&self, grade: &str) -> Option<f64> {
        self.entries.iter().find(|(g, _)| g == grade).map(|&(_, p)| p)
    }

    pub fn is_sentinel(&self, grade: &str) -> bool {
        self.sentinels.iter().any(|s| s == grade)
    }

    /// The single countability rule shared by extraction and aggregation.
    pub fn is_countable(&self, grade: &str) -> bool {
        self.countable_points(grade).is_some()
    }

    /// Points for a grade only when it is countable.
    pub fn countable_points(&self, grade: &str) -> Option<f64> {
        if self.is_sentinel(grade) { None } else { self.points(grade) }
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(g, _)| g.as_str())
    }

    pub fn sentinels(&self) -> &[String] {
        &self.sentinels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_passes_validation() {
        let d = GradeScale::default();
        let rebuilt = GradeScale::new(DEFAULT_SCALE.iter().copied()).unwrap();
        assert_eq!(d, rebuilt);
        assert_eq!(d.len(), 9);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let d = GradeScale::default();
        assert_eq!(d.points("A+"), Some(4.0));
        assert_eq!(d.points("a+"), None);
        assert!(!d.is_countable("b"));
    }

    #[test]
    fn sentinels_never_count() {
        let d = GradeScale::default();
        for g in ["Con", "0", ""] {
            assert!(d.is_sentinel(g));
            assert!(!d.is_countable(g));
        }
        assert!(d.is_countable("F"));
    }

    #[test]
    fn sentinel_wins_over_scale_entry() {
        let scale = GradeScale::new([("P", 4.0), ("Con", 2.0)]).unwrap();
        assert_eq!(scale.points("Con"), Some(2.0));
        assert!(!scale.is_countable("Con"));
        assert_eq!(scale.countable_points("Con"), None);

        let scale = scale.with_sentinels(Vec::<String>::new());
        assert!(scale.is_countable("Con"));
    }

    #[test]
    fn countable_and_points_agree() {
        let scale = GradeScale::new([("A", 4.0), ("Con", 1.0), ("W", 0.0)]).unwrap().with_sentinels(["W", "x"]);
        for g in ["A", "Con", "W", "x", "", "a", "Z"] {
            assert_eq!(scale.is_countable(g), scale.countable_points(g).is_some(), "{g:?}");
        }
    }

    #[test]
    fn rejects_bad_tables() {
        assert_eq!(GradeScale::new(Vec::<(String, f64)>::new()), Err(ScaleError::Empty));
        assert!(matches!(
            GradeScale::new([("A", 4.0), ("A", 3.0)]),
            Err(ScaleError::DuplicateSymbol { .. })
        ));
        assert!(matches!(
            GradeScale::new([("A", 4.5)]),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert!(matches!(
            GradeScale::new([("A", -0.1)]),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert!(matches!(
            GradeScale::new([("A", f64::NAN)]),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert_eq!(GradeScale::new([("", 1.0)]), Err(ScaleError::EmptySymbol { index: 0 }));
    }

    #[test]
    fn keys_are_not_normalized() {
        // "a" and "A" are distinct symbols
        let scale = GradeScale::new([("A", 4.0), ("a", 1.0)]).unwrap();
        assert_eq!(scale.points("a"), Some(1.0));
        assert_eq!(scale.symbols().collect::<Vec<_>>(), vec!["A", "a"]);
    }
}
