// imgresize/src/utils/mod.rs
use std::path::{Path, PathBuf};

/// Returns `output` when given, otherwise `input_path` with `_<suffix>`
/// inserted before its extension, in the same directory.
pub fn generate_output_path(input_path: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stem = input_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let new_filename = match input_path.extension() {
                Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
                None => format!("{}_{}", stem, suffix),
            };

            input_path.with_file_name(new_filename)
        }
    }
}

pub fn format_dimensions((width, height): (u32, u32)) -> String {
    format!("{}x{}", width, height)
}
