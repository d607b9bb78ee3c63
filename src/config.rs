use std::path::{Path, PathBuf};

use image::Rgb;

use crate::fonts::FontSource;

// Apple iconset naming: base size plus @2x variant
pub const ICON_SIZES: &[(&str, u32)] = &[
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

pub const BG_COLOR: Rgb<u8> = Rgb([0, 0, 170]); // #0000AA
pub const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const ICON_TEXT: &str = "0x";

/// Glyph size relative to the icon edge.
pub const FONT_SCALE: f32 = 0.45;
pub const MIN_FONT_PX: u32 = 8;

pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFMono-Bold.otf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.dfont",
    "/Library/Fonts/Courier New Bold.ttf",
    "/System/Library/Fonts/Courier.dfont",
];

pub const RESOURCES_DIR: &[&str] = &["Sources", "BlueScreenOfDeath", "Resources"];
pub const ICONSET_NAME: &str = "AppIcon.iconset";
pub const ICNS_NAME: &str = "AppIcon.icns";

pub const ICONUTIL: &str = "iconutil";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSize {
    pub file_name: String,
    pub pixels: u32,
}

impl IconSize {
    pub fn new(file_name: impl Into<String>, pixels: u32) -> Self {
        Self { file_name: file_name.into(), pixels }
    }
}

pub fn default_sizes() -> Vec<IconSize> {
    ICON_SIZES.iter().map(|&(name, px)| IconSize::new(name, px)).collect()
}

/// Colors and text shared by every image of one icon set.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub text: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: BG_COLOR,
            foreground: TEXT_COLOR,
            text: ICON_TEXT.to_string(),
        }
    }
}

/// Everything one generate-and-package run needs.
pub struct IconPlan {
    pub iconset_dir: PathBuf,
    pub icns_path: PathBuf,
    pub sizes: Vec<IconSize>,
    pub style: IconStyle,
    pub fonts: Vec<Box<dyn FontSource>>,
}

impl IconPlan {
    pub fn for_root(root: &Path) -> Self {
        let resources = RESOURCES_DIR.iter().fold(root.to_path_buf(), |acc, part| acc.join(part));
        Self {
            iconset_dir: resources.join(ICONSET_NAME),
            icns_path: resources.join(ICNS_NAME),
            sizes: default_sizes(),
            style: IconStyle::default(),
            fonts: FONT_CANDIDATES
                .iter()
                .map(|p| Box::new(PathBuf::from(p)) as Box<dyn FontSource>)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_follow_iconset_convention() {
        let sizes = default_sizes();
        assert_eq!(sizes.len(), 10);
        for s in &sizes {
            let base: u32 = s.file_name["icon_".len()..]
                .split('x')
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap();
            let expected = if s.file_name.contains("@2x") { base * 2 } else { base };
            assert_eq!(s.pixels, expected, "{}", s.file_name);
        }
    }

    #[test]
    fn plan_paths_are_siblings() {
        let plan = IconPlan::for_root(Path::new("/proj"));
        assert_eq!(
            plan.iconset_dir,
            Path::new("/proj/Sources/BlueScreenOfDeath/Resources/AppIcon.iconset")
        );
        assert_eq!(plan.icns_path.parent(), plan.iconset_dir.parent());
        assert_eq!(plan.fonts.len(), FONT_CANDIDATES.len());
    }
}
