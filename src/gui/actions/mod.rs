// src/gui/actions/mod.rs
//
// Button handlers. Submodules stay private; consumers see actions::{copy,export,load}.

mod copy;
mod export;
mod load;

pub use copy::copy;
pub use export::export;
pub use load::load;
