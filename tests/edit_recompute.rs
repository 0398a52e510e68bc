// tests/edit_recompute.rs
use gpa_scrape::config::options::ExtractOptions;
use gpa_scrape::config::scale::GradeScale;
use gpa_scrape::courses::{CourseList, Edit, EditError, Field};
use gpa_scrape::{courses, runner};

const PAGE: &str = r#"<table class="table table-striped col-md-12"><tbody>
<tr><td>M1</td><td>Algebra</td><td></td><td>3</td><td></td><td></td><td>A</td></tr>
<tr><td>P1</td><td>Physics</td><td></td><td>3</td><td></td><td></td><td>B+</td></tr>
</tbody></table>"#;

#[test]
fn every_edit_returns_the_fresh_gpa() {
    let scale = GradeScale::default();
    let mut list = runner::run_html(PAGE, &ExtractOptions::default(), &scale).unwrap().courses;
    assert_eq!(list.gpa(&scale).gpa_display(), "3.50");

    let r = list
        .apply(Edit::Add { name: "Thesis".into(), credits: "2".into(), grade: "Con".into() }, &scale)
        .unwrap();
    assert_eq!(r.total_credits, 6);
    assert_eq!(list.len(), 3);

    let r = list
        .apply(Edit::Set { index: 2, field: Field::Grade, value: "A+".into() }, &scale)
        .unwrap();
    assert_eq!(r.total_credits, 8);
    assert_eq!(r, list.gpa(&scale));

    let r = list.apply(Edit::Remove { index: 0 }, &scale).unwrap();
    assert_eq!(r.total_credits, 5);
    assert_eq!(list.get(0).unwrap().name, "Physics");
}

#[test]
fn rejected_edit_keeps_list_and_gpa() {
    let scale = GradeScale::default();
    let mut list = CourseList::from(courses![("Algebra", 3, "A"), ("Physics", 3, "B+")]);
    let before = (list.clone(), list.gpa(&scale));

    let err = list
        .apply(Edit::Set { index: 1, field: Field::Credits, value: "-3".into() }, &scale)
        .unwrap_err();
    assert!(matches!(err, EditError::BadCredits { .. }));
    assert_eq!((list.clone(), list.gpa(&scale)), before);
}

#[test]
fn report_marks_uncounted_rows() {
    let scale = GradeScale::default();
    let list = CourseList::from(courses![(3, "A"), (2, "Con"), (4, "Q")]);
    let report = list.report(&scale);
    assert_eq!(report.counted, vec![0]);
    assert_eq!(report.skipped.len(), 2);
    assert!(!report.is_counted(1));
    assert_eq!(report.result, list.gpa(&scale));
}
