//! Renders the "0x" app icon at every iconset size and bundles it into an `.icns`.

pub mod config;
pub mod error;
pub mod fonts;
pub mod icon;
pub mod iconset;
pub mod logger;
pub mod packager;

use std::path::PathBuf;

use log::{info, warn};

use config::IconPlan;
use error::RunError;
use fonts::resolve_font;
use iconset::write_iconset;
use packager::Packager;

/// Writes the iconset, then hands it to `packager`. Returns the bundle path.
///
/// Files already written stay on disk when a later step fails.
pub fn run(plan: &IconPlan, packager: &dyn Packager) -> Result<PathBuf, RunError> {
    let font = resolve_font(&plan.fonts);
    if font.is_none() {
        warn!("No monospace font found, using default");
    }

    write_iconset(&plan.iconset_dir, &plan.sizes, font.as_deref(), &plan.style)?;

    info!("Creating {}", plan.icns_path.display());
    let outcome = packager.package(&plan.iconset_dir, &plan.icns_path)?;
    if !outcome.success {
        return Err(RunError::Packaging {
            tool: packager.name().to_string(),
            diagnostics: outcome.diagnostics,
        });
    }

    info!("App icon created: {}", plan.icns_path.display());
    Ok(plan.icns_path.clone())
}
