// crates/engine_core/src/assets.rs

use std::path::{Path, PathBuf};

use engine_shared::{HostError, Image};
use tracing::{debug, info};

/// Resolves game-relative asset paths against a root directory.
#[derive(Clone, Debug)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn load_image(&self, relative: &str) -> Result<Image, HostError> {
        load_image_file(&self.resolve(relative))
    }
}

/// Decodes any supported image file into RGBA8.
pub fn load_image_file(path: &Path) -> Result<Image, HostError> {
    debug!(path = %path.display(), "loading image");

    let img = image::open(path).map_err(|e| HostError::ImageLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    info!(path = %path.display(), width, height, "image loaded");

    Image::from_rgba(width, height, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_reports_its_path() {
        let assets = AssetRoot::new("no/such/dir");
        let err = assets.load_image("Resources/A.png").unwrap_err();
        match err {
            HostError::ImageLoad { path, .. } => assert!(path.ends_with("A.png")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn decodes_a_png_written_to_disk() {
        let dir = std::env::temp_dir().join(format!("swarm-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dot.png");

        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));
        img.save(&path).unwrap();

        let loaded = AssetRoot::new(&dir).load_image("dot.png").unwrap();
        assert_eq!((loaded.width(), loaded.height()), (2, 1));
        assert_eq!(loaded.at(0, 0), engine_shared::Rgb::new(10, 20, 30));
        assert_eq!(loaded.alpha_at(1, 0), 0);

        std::fs::remove_dir_all(&dir).ok();
    }
}
