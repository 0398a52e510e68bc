// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the ground truth lives in one page's HTML and how
//! to read it tolerantly. Specs are pure: they take page text plus
//! configuration and return typed rows. Fetching pages, logging and
//! presentation belong to the callers (`runner`, `cli`, `gui`).
//!
//! Conventions:
//! - Locate the target block by selector, then scan locally inside it.
//! - Return stable row shapes and report dropped rows with a reason instead
//!   of logging them here.
//! - Testable offline against inline fixtures.
pub mod courses;
