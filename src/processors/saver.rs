// imgresize/src/processors/saver.rs
use crate::core::{ResizeError, Result};
use image::{ColorType, DynamicImage, ImageError, ImageFormat};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Clone, Default)]
pub struct Saver;

impl Saver {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `image` to `path`, picking the format from the extension.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let format = self.detect_format(path)?;
        self.save_with_format(image, path, format)
    }

    pub fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        let format = ImageFormat::from_path(path).map_err(|_| {
            ResizeError::UnsupportedFormat(format!(
                "cannot infer an image format from '{}'",
                path.display()
            ))
        })?;

        if !format.writing_enabled() {
            return Err(ResizeError::UnsupportedFormat(format!(
                "writing {:?} images is not supported",
                format
            )));
        }

        Ok(format)
    }

    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        log::debug!("Saving image to {} as {:?}", path.display(), format);

        match format {
            ImageFormat::Jpeg => self.write(&jpeg_compatible(image), path, format),
            _ => self.write(image, path, format),
        }
    }

    // Encodes into a temporary file beside `path` and renames it over `path`
    // only once encoding succeeded; on error the temporary file is dropped.
    fn write(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
            ResizeError::Write(format!("cannot create '{}': {}", path.display(), e))
        })?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            image.write_to(&mut writer, format).map_err(encode_error)?;
            writer
                .flush()
                .map_err(|e| ResizeError::Write(e.to_string()))?;
        }

        temp.persist(path).map_err(|e| {
            ResizeError::Write(format!("cannot replace '{}': {}", path.display(), e.error))
        })?;

        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

// The JPEG encoder only takes 8-bit gray or RGB.
fn jpeg_compatible(image: &DynamicImage) -> DynamicImage {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => image.clone(),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

fn encode_error(err: ImageError) -> ResizeError {
    match err {
        ImageError::Unsupported(e) => ResizeError::UnsupportedFormat(e.to_string()),
        ImageError::Encoding(e) => ResizeError::Write(e.to_string()),
        ImageError::IoError(e) => ResizeError::Write(e.to_string()),
        other => ResizeError::Unknown(other.to_string()),
    }
}
