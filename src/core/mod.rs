// imgresize/src/core/mod.rs
pub mod processor;

use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use processor::{resize_image, ImageProcessor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

/// Largest accepted output side, in pixels.
pub const MAX_DIMENSION: u32 = 100_000;

/// Default cap on the buffers a single resample may allocate.
pub const DEFAULT_MEMORY_LIMIT: u64 = 2 * 1024 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub algorithm: ResizeAlgorithm,
    pub max_dimension: u32,
    pub memory_limit: u64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            algorithm: ResizeAlgorithm::Lanczos3,
            max_dimension: MAX_DIMENSION,
            memory_limit: DEFAULT_MEMORY_LIMIT,
        }
    }
}

/// Parameters for a single resize run. Built once from user input and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequest {
    input_path: PathBuf,
    output_path: PathBuf,
    width: u32,
    height: u32,
    maintain_aspect: bool,
}

impl ResizeRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        width: u32,
        height: u32,
        maintain_aspect: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ResizeError::InvalidDimensions { width, height });
        }

        Ok(Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            width,
            height,
            maintain_aspect,
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn maintain_aspect(&self) -> bool {
        self.maintain_aspect
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome {
    pub original: (u32, u32),
    pub resized: (u32, u32),
    pub output_path: PathBuf,
}

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write image: {0}")]
    Write(String),

    #[error("Invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Memory limit exceeded: {0}")]
    MemoryLimitExceeded(String),

    #[error("{0}")]
    Unknown(String),
}

/// Failure category of a [`ResizeError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Decode,
    UnsupportedFormat,
    Write,
    InvalidDimensions,
    MemoryLimitExceeded,
    Unknown,
}

impl ResizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResizeError::NotFound(_) => ErrorKind::NotFound,
            ResizeError::Decode(_) => ErrorKind::Decode,
            ResizeError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            ResizeError::Write(_) => ErrorKind::Write,
            ResizeError::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
            ResizeError::MemoryLimitExceeded(_) => ErrorKind::MemoryLimitExceeded,
            ResizeError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;

/// Formats this build can both decode and encode.
pub fn supported_formats() -> Vec<ImageFormat> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled() && format.writing_enabled())
        .collect()
}
