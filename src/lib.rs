mod cli;
mod core;
mod launcher;
mod processors;
mod prompt;
mod utils;

pub use cli::{Algorithm, Cli};
pub use crate::core::{
    resize_image, supported_formats, ErrorKind, ImageProcessor, ProcessConfig, ResizeAlgorithm,
    ResizeError, ResizeOutcome, ResizeRequest, Result, DEFAULT_MEMORY_LIMIT, MAX_DIMENSION,
};
pub use launcher::{open_with_default_app, LaunchError, Opener, Platform};
pub use processors::{estimate_resize_bytes, fit_within, Loader, Resizer, Saver};
pub use prompt::Prompter;
pub use utils::{format_dimensions, generate_output_path};

pub mod prelude {
    pub use crate::{ImageProcessor, ProcessConfig, Prompter, ResizeAlgorithm, ResizeRequest};
}

// Re-export commonly used types
pub use image::DynamicImage;
