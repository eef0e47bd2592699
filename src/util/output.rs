//! Writing figures to disk.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{Result, SymfigError};
use crate::figures::SvgFile;

/// Create `dir` and its parents if missing, and return it.
pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| SymfigError::create_dir(dir.to_path_buf(), e))?;
    Ok(dir.to_path_buf())
}

/// Save an SVG document into `dir`.
pub fn write_svg(dir: &Path, file: &SvgFile) -> Result<PathBuf> {
    let path = dir.join(&file.name);
    svg::save(&path, &file.document).map_err(|e| SymfigError::file_write(path.clone(), e))?;
    tracing::info!(path = %path.display(), "wrote svg");
    Ok(path)
}

/// Save an RGB image as PNG into `dir`.
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> Result<PathBuf> {
    let path = dir.join(name);
    image.save(&path)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote png"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let dir = ensure_dir(&nested).unwrap();
        assert!(dir.is_dir());
        // second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn write_svg_uses_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let file = SvgFile::new("blank.svg", draw::canvas(10.0, 10.0));
        let path = write_svg(tmp.path(), &file).unwrap();
        assert_eq!(path, tmp.path().join("blank.svg"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn write_svg_reports_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = SvgFile::new("blank.svg", draw::canvas(10.0, 10.0));
        let err = write_svg(&tmp.path().join("missing"), &file).unwrap_err();
        assert!(matches!(err, SymfigError::FileWrite { .. }));
    }

    #[test]
    fn write_png_round_trips_size() {
        let tmp = tempfile::tempdir().unwrap();
        let image = RgbImage::new(4, 3);
        let path = write_png(tmp.path(), "tiny.png", &image).unwrap();
        let back = image::open(path).unwrap();
        assert_eq!((back.width(), back.height()), (4, 3));
    }
}
