// imgresize/src/processors/mod.rs
mod loader;
mod resizer;
mod saver;

pub use loader::Loader;
pub use resizer::{estimate_resize_bytes, fit_within, Resizer};
pub use saver::Saver;
