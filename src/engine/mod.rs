// src/engine/mod.rs
//! GPA engine: filtering + aggregation over any ordered course list.
//!
//! Stateless. Callers own the list and call `compute_gpa` again after every
//! change; nothing here caches a previous result.

mod gpa;
mod types;

pub use gpa::{compute_gpa, evaluate};
pub use types::{CourseSkip, GpaReport, GpaResult, GradedCourse};
