// src/engine/gpa.rs
use crate::config::scale::GradeScale;

use super::types::{CourseSkip, GpaReport, GpaResult, GradedCourse};

/// Credit-weighted GPA over the countable courses of `courses`.
pub fn compute_gpa<C: GradedCourse>(courses: &[C], scale: &GradeScale) -> GpaResult {
    evaluate(courses, scale).result
}

/// Like `compute_gpa`, also reporting per-row outcomes.
///
/// Rows are visited and summed in input order so repeated runs over the same
/// list are bit-for-bit identical.
pub fn evaluate<C: GradedCourse>(courses: &[C], scale: &GradeScale) -> GpaReport {
    let mut report = GpaReport::default();
    // u64: a list of u32 credit counts cannot overflow it
    let mut total_credits: u64 = 0;
    let mut total_points: f64 = 0.0;

    for (i, course) in courses.iter().enumerate() {
        let Some(credits) = course.credits() else {
            report.skipped.push((i, CourseSkip::BadCredits));
            continue;
        };
        let grade = course.grade();
        let Some(points) = scale.countable_points(grade) else {
            report.skipped.push((i, CourseSkip::InvalidGrade { grade: s!(grade) }));
            continue;
        };

        total_credits += u64::from(credits);
        total_points += f64::from(credits) * points;
        report.counted.push(i);
    }

    let gpa = if total_credits > 0 { total_points / total_credits as f64 } else { 0.0 };
    report.result = GpaResult { total_credits, total_points, gpa };
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::CourseRecord;

    fn scale() -> GradeScale {
        GradeScale::default()
    }

    #[test]
    fn single_course_gpa_equals_grade_points() {
        let s = scale();
        for sym in s.symbols() {
            let c = [CourseRecord::new("", "X", 3, sym)];
            let r = compute_gpa(&c, &s);
            assert_eq!(r.total_credits, 3);
            assert!((r.gpa - s.points(sym).unwrap()).abs() < 1e-12, "{sym}");
        }
    }

    #[test]
    fn empty_and_all_uncountable_give_zero() {
        let s = scale();
        let none: [CourseRecord; 0] = [];
        assert_eq!(compute_gpa(&none, &s), GpaResult::default());

        let junk = courses![(3, "Con"), (2, "0"), (4, ""), (1, "W")];
        let r = compute_gpa(&junk, &s);
        assert_eq!(r.total_credits, 0);
        assert_eq!(r.gpa, 0.0);
    }

    #[test]
    fn mixed_list_matches_hand_computation() {
        let list = courses![(3, "A"), (3, "B+"), (2, "Con")];
        let r = compute_gpa(&list, &scale());
        assert_eq!(r.total_credits, 6);
        assert!((r.total_points - 21.0).abs() < 1e-9);
        assert_eq!(r.gpa_display(), "3.50");
    }

    #[test]
    fn failing_grade_counts_credits() {
        let r = compute_gpa(&courses![(6, "F")], &scale());
        assert_eq!(r.total_credits, 6);
        assert_eq!(r.gpa_display(), "0.00");
    }

    #[test]
    fn zero_credit_course_adds_nothing() {
        let r = compute_gpa(&courses![(0, "A+")], &scale());
        assert_eq!(r.total_credits, 0);
        assert_eq!(r.gpa, 0.0);
    }

    #[test]
    fn same_input_same_output() {
        let list = courses![(3, "A"), (2, "C+"), (4, "B"), (1, "D+")];
        let before = list.clone();
        let a = evaluate(&list, &scale());
        let b = evaluate(&list, &scale());
        assert_eq!(a, b);
        assert_eq!(list, before);
    }

    #[test]
    fn permutation_keeps_totals() {
        let list = courses![(3, "A"), (2, "C+"), (4, "B"), (1, "D+"), (3, "B+")];
        let mut rev = list.clone();
        rev.reverse();
        let a = compute_gpa(&list, &scale());
        let b = compute_gpa(&rev, &scale());
        assert_eq!(a.total_credits, b.total_credits);
        assert!((a.gpa - b.gpa).abs() < 1e-12);
    }

    #[test]
    fn unreadable_credits_are_skipped() {
        let rows = [("3", "A"), ("three", "A+"), ("", "B"), ("2", "B")];
        let report = evaluate(&rows, &scale());
        assert_eq!(report.counted, vec![0, 3]);
        assert_eq!(report.skipped, vec![(1, CourseSkip::BadCredits), (2, CourseSkip::BadCredits)]);
        assert_eq!(report.result.total_credits, 5);
        assert!(report.is_counted(3));
        assert!(!report.is_counted(1));
    }

    #[test]
    fn huge_credit_counts_stay_in_range() {
        let list = courses![(u32::MAX, "A+"), (u32::MAX, "A+"), (u32::MAX, "F")];
        let r = compute_gpa(&list, &scale());
        assert_eq!(r.total_credits, 3 * u64::from(u32::MAX));
        assert!(r.gpa <= 4.0 && r.gpa >= 0.0);
        assert_eq!(r.gpa_display(), "2.67");
    }

    #[test]
    fn report_names_bad_grade() {
        let report = evaluate(&courses![(3, "Con")], &scale());
        assert_eq!(report.skipped, vec![(0, CourseSkip::InvalidGrade { grade: s!("Con") })]);
    }
}
