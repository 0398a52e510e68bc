// src/gui/components/mod.rs
pub mod add_form;
pub mod course_table;
pub mod export_bar;
pub mod load_bar;
pub mod summary_bar;
