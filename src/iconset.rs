use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::info;

use crate::config::{IconSize, IconStyle};
use crate::error::IconError;
use crate::icon::render_icon;

/// Creates `dir` and its parents; an existing directory is fine.
pub fn prepare_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir).map_err(|source| IconError::CreateDir { path: dir.to_path_buf(), source })
}

/// Renders every size in order and writes it as PNG into `dir`, replacing existing files.
pub fn write_iconset(
    dir: &Path,
    sizes: &[IconSize],
    font: Option<&Path>,
    style: &IconStyle,
) -> Result<Vec<PathBuf>, IconError> {
    prepare_dir(dir)?;
    let mut written = Vec::with_capacity(sizes.len());
    for size in sizes {
        let img = render_icon(size.pixels, font, style);
        let path = dir.join(&size.file_name);
        img.save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::Write { path: path.clone(), source })?;
        info!("Generated {} ({}x{})", size.file_name, size.pixels, size.pixels);
        written.push(path);
    }
    Ok(written)
}
