// imgresize/src/processors/loader.rs
use crate::core::{ResizeError, Result};
use image::{DynamicImage, ImageError, ImageReader};
use std::io;
use std::path::Path;

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let reader = ImageReader::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ResizeError::NotFound(path.to_path_buf()),
            _ => ResizeError::Decode(e.to_string()),
        })?;

        let image = reader
            .with_guessed_format()
            .map_err(|e| ResizeError::Decode(e.to_string()))?
            .decode()
            .map_err(decode_error)?;

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }
}

fn decode_error(err: ImageError) -> ResizeError {
    match err {
        ImageError::Unsupported(e) => ResizeError::UnsupportedFormat(e.to_string()),
        ImageError::Decoding(e) => ResizeError::Decode(e.to_string()),
        ImageError::IoError(e) => ResizeError::Decode(e.to_string()),
        other => ResizeError::Unknown(other.to_string()),
    }
}
