// src/config/consts.rs

// Course table on the portal's "courses" page
pub const TABLE_TAG: &str = "table";
pub const TABLE_CLASSES: &str = "table table-striped col-md-12";

// Column layout of a course row
pub const COL_CODE: usize = 0;
pub const COL_NAME: usize = 1;
pub const COL_CREDITS: usize = 3;
pub const COL_GRADE: usize = 6;
pub const MIN_COLUMNS: usize = 7;

// Grade scale
pub const MIN_POINTS: f64 = 0.0;
pub const MAX_POINTS: f64 = 4.0;
pub const DEFAULT_SCALE: &[(&str, f64)] = &[
    ("A+", 4.0),
    ("A", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("C+", 2.7),
    ("C", 2.4),
    ("D+", 2.2),
    ("D", 2.0),
    ("F", 0.0),
];
// In progress / withdrawn / ungraded markers used by the portal
pub const DEFAULT_SENTINELS: &[&str] = &["Con", "0", ""];

// Input
pub const DEFAULT_PAGE_FILE: &str = "full_courses_page.html";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "courses";

// Diagnostics
pub const LOG_FILE: &str = ".gpa/debug.log";
