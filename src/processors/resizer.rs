// imgresize/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
    keep_aspect: bool,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm, keep_aspect: bool) -> Self {
        Self {
            algorithm,
            keep_aspect,
        }
    }

    /// Resamples `image` to exactly `width` x `height`.
    pub fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} with {:?}",
            image.width(),
            image.height(),
            width,
            height,
            self.algorithm
        );

        image.resize_exact(width, height, self.filter_type())
    }

    /// Target dimensions for a source of `orig` pixels and a requested box
    /// of `target` pixels.
    pub fn calculate_dimensions(&self, orig: (u32, u32), target: (u32, u32)) -> (u32, u32) {
        if self.keep_aspect {
            fit_within(orig, target)
        } else {
            target
        }
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Bytes the resample from `orig` to `target` allocates: a 32-bit float RGBA
/// pass of `orig.0` x `target.1`, then the output buffer. `None` on overflow.
pub fn estimate_resize_bytes(
    orig: (u32, u32),
    target: (u32, u32),
    bytes_per_pixel: u64,
) -> Option<u64> {
    let intermediate = (orig.0 as u64)
        .checked_mul(target.1 as u64)?
        .checked_mul(16)?;
    let output = (target.0 as u64)
        .checked_mul(target.1 as u64)?
        .checked_mul(bytes_per_pixel)?;
    intermediate.checked_add(output)
}

/// Shrinks whichever side of `target` is out of proportion with `orig`.
/// The adjusted side is floored, and never drops below one pixel.
pub fn fit_within(orig: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (orig_w, orig_h) = orig;
    let (target_w, target_h) = target;

    if orig_w == 0 || orig_h == 0 || target_h == 0 {
        return target;
    }

    let aspect_ratio = orig_w as f64 / orig_h as f64;

    if target_w as f64 / target_h as f64 > aspect_ratio {
        let width = (target_h as f64 * aspect_ratio).floor() as u32;
        (width.max(1), target_h)
    } else {
        let height = (target_w as f64 / aspect_ratio).floor() as u32;
        (target_w, height.max(1))
    }
}
