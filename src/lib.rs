// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;
pub mod engine;

pub mod courses;
pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
