// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod scale;
pub mod state;

pub use scale::GradeScale;
