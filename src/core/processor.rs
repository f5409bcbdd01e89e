// imgresize/src/core/processor.rs
use super::{ProcessConfig, ResizeError, ResizeOutcome, ResizeRequest, Result};
use crate::processors::{estimate_resize_bytes, Loader, Resizer, Saver};
use crate::utils::format_dimensions;
use std::path::Path;

pub struct ImageProcessor {
    config: ProcessConfig,
    loader: Loader,
    saver: Saver,
}

impl ImageProcessor {
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            config,
            loader: Loader::new(),
            saver: Saver::new(),
        }
    }

    pub fn process(&self, request: &ResizeRequest) -> Result<ResizeOutcome> {
        self.process_with(request, |_| {})
    }

    /// Like [`ImageProcessor::process`], calling `on_decoded` with the source
    /// dimensions as soon as the input is decoded.
    fn process_with<F>(&self, request: &ResizeRequest, on_decoded: F) -> Result<ResizeOutcome>
    where
        F: FnOnce((u32, u32)),
    {
        let input_path = request.input_path();
        let output_path = request.output_path();

        if !input_path.exists() {
            return Err(ResizeError::NotFound(input_path.to_path_buf()));
        }

        let image = self.loader.load(input_path)?;
        let original = (image.width(), image.height());
        on_decoded(original);

        let resizer = Resizer::new(self.config.algorithm, request.maintain_aspect());
        let (width, height) =
            resizer.calculate_dimensions(original, (request.width(), request.height()));

        self.check_limits(original, (width, height), image.color().bytes_per_pixel())?;

        let resized = resizer.resize(&image, width, height);
        drop(image);

        self.saver.save(&resized, output_path)?;

        log::info!(
            "Resized {} from {} to {}",
            input_path.display(),
            format_dimensions(original),
            format_dimensions((width, height))
        );

        Ok(ResizeOutcome {
            original,
            resized: (width, height),
            output_path: output_path.to_path_buf(),
        })
    }

    fn check_limits(
        &self,
        original: (u32, u32),
        target: (u32, u32),
        bytes_per_pixel: u8,
    ) -> Result<()> {
        let (width, height) = target;
        let max = self.config.max_dimension;
        if width > max || height > max {
            return Err(ResizeError::MemoryLimitExceeded(format!(
                "target {} exceeds the maximum of {} pixels per side",
                format_dimensions(target),
                max
            )));
        }

        match estimate_resize_bytes(original, target, bytes_per_pixel as u64) {
            Some(bytes) if bytes <= self.config.memory_limit => Ok(()),
            _ => Err(ResizeError::MemoryLimitExceeded(format!(
                "resizing {} to {} needs more than {} bytes",
                format_dimensions(original),
                format_dimensions(target),
                self.config.memory_limit
            ))),
        }
    }

    /// Console-reporting variant of [`ImageProcessor::process`].
    pub fn run(&self, request: &ResizeRequest) -> bool {
        let report_original = |original: (u32, u32)| {
            println!("Original size: {}", format_dimensions(original));
        };

        match self.process_with(request, report_original) {
            Ok(outcome) => {
                println!("Resized image saved as: {}", outcome.output_path.display());
                println!("New size: {}", format_dimensions(outcome.resized));
                true
            }
            Err(e) => {
                log::debug!("Resize failed ({:?}): {}", e.kind(), e);
                println!("Error: {}", e);
                false
            }
        }
    }
}

/// Resizes `input_path` into `output_path` with the default configuration and
/// reports the result on the console. Returns whether the output was written.
pub fn resize_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    width: u32,
    height: u32,
    maintain_aspect: bool,
) -> bool {
    let request = match ResizeRequest::new(
        input_path.as_ref(),
        output_path.as_ref(),
        width,
        height,
        maintain_aspect,
    ) {
        Ok(request) => request,
        Err(e) => {
            println!("Error: {}", e);
            return false;
        }
    };

    ImageProcessor::new(ProcessConfig::default()).run(&request)
}
