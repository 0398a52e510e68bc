// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gpa_scrape::config::options::ExtractOptions;
use gpa_scrape::config::scale::GradeScale;
use gpa_scrape::{engine, runner, specs};

const GRADES: [&str; 11] = ["A+", "A", "B+", "B", "C+", "C", "D+", "D", "F", "Con", "0"];

fn synthetic_page(rows: usize) -> String {
    let mut body = String::new();
    for i in 0..rows {
        let grade = GRADES[i % GRADES.len()];
        body.push_str(&format!(
            "<tr><td>C{i:04}</td><td>Course {i}</td><td>Term</td><td>{}</td>\
             <td>Staff</td><td>Lecture</td><td>{grade}</td></tr>\n",
            1 + i % 4
        ));
    }
    format!(
        "<html><body><table class=\"table table-striped col-md-12\"><tbody>{body}</tbody></table></body></html>"
    )
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(400);
    let opts = ExtractOptions::default();
    let scale = GradeScale::default();

    c.bench_function("extract_400_rows", |b| {
        b.iter(|| {
            let ex = specs::courses::extract(black_box(&page), &opts.selector, &opts.layout, &scale);
            black_box(ex.map(|e| e.rows.len()).unwrap_or(0))
        })
    });

    let courses = runner::run_html(&page, &opts, &scale).map(|s| s.courses).unwrap_or_default();
    c.bench_function("compute_gpa_400_rows", |b| {
        b.iter(|| black_box(engine::compute_gpa(black_box(courses.as_slice()), &scale)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
