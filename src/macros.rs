// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate anything that derefs to &str
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Build a `Vec<CourseRecord>` from `(credits, grade)` or
/// `(name, credits, grade)` tuples. Codes are left empty.
///
/// ```
/// use gpa_scrape::courses;
/// let list = courses![(3, "A"), ("Algebra", 2, "B+")];
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1].name, "Algebra");
/// ```
#[macro_export]
macro_rules! courses {
    (@one ($name:expr, $credits:expr, $grade:expr)) => {
        $crate::courses::CourseRecord::new("", $name, $credits, $grade)
    };
    (@one ($credits:expr, $grade:expr)) => {
        $crate::courses::CourseRecord::new("", "Course", $credits, $grade)
    };
    ($($row:tt),* $(,)?) => {
        ::std::vec![$( $crate::courses!(@one $row) ),*]
    };
}
