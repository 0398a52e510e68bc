// tests/export.rs
use std::fs;
use std::path::PathBuf;

use gpa_scrape::config::options::{ExportFormat, ExportOptions};
use gpa_scrape::config::scale::GradeScale;
use gpa_scrape::courses::CourseList;
use gpa_scrape::{courses, file};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gpa_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> CourseList {
    CourseList::from(courses![("Algebra", 3, "A"), ("Thesis", 2, "Con"), ("Physics", 3, "B+")])
}

#[test]
fn csv_export_has_rows_and_summary() {
    let scale = GradeScale::default();
    let list = sample();
    let report = list.report(&scale);

    let txt = file::to_export_string(&ExportOptions::default(), list.as_slice(), &report, &scale).unwrap();
    let lines: Vec<_> = txt.lines().collect();
    assert_eq!(lines[0], "Code,Name,Credits,Grade,Points");
    assert_eq!(lines[1], ",Algebra,3,A,3.7");
    assert_eq!(lines[2], ",Thesis,2,Con,");
    assert_eq!(lines[3], ",Physics,3,B+,3.3");
    assert_eq!(lines[4], "Total Credits,6");
    assert_eq!(lines[5], "GPA,3.50");
    assert_eq!(lines.len(), 6);
}

#[test]
fn tsv_without_headers_or_summary() {
    let scale = GradeScale::default();
    let list = sample();
    let report = list.report(&scale);

    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    export.include_summary = false;

    let txt = file::to_export_string(&export, list.as_slice(), &report, &scale).unwrap();
    let first = txt.lines().next().unwrap();
    assert_eq!(first, "\tAlgebra\t3\tA\t3.7");
    assert_eq!(txt.lines().count(), 3);
}

#[test]
fn write_export_creates_directory() {
    let scale = GradeScale::default();
    let list = sample();
    let report = list.report(&scale);

    let dir = tmp_dir("write");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("nested").join("grades").to_str().unwrap());

    let path = file::write_export(&export, list.as_slice(), &report, &scale).unwrap();
    assert!(path.to_string_lossy().ends_with("grades.csv"));
    let body = fs::read_to_string(&path).unwrap();
    assert!(body.ends_with("GPA,3.50\n"));
}

#[test]
fn scale_file_round_trips_through_extraction_rules() {
    let dir = tmp_dir("scale");
    let path = dir.join("scale.csv");
    fs::write(&path, "grade,points\nH,4.0\nP,2.0\n").unwrap();

    let scale = file::load_scale(&path).unwrap();
    let list = CourseList::from(courses![(2, "H"), (2, "P"), (2, "A")]);
    assert_eq!(list.gpa(&scale).gpa_display(), "3.00");
}
