// File: crates/sweep-chart/src/export.rs
// Summary: Post-processing of rendered rasters: tight crop, PNG encoding, atomic file write.

use std::io::{Cursor, Write};
use std::path::Path;

use image::{imageops, ImageFormat, Rgba, RgbaImage};

use crate::error::RenderError;

/// Crop `img` to the bounding box of pixels that differ from `background`,
/// grown by `pad` pixels on each side (clamped to the image).
/// An image with nothing drawn on it is returned unchanged.
pub fn tight_crop(img: &RgbaImage, background: Rgba<u8>, pad: u32) -> RgbaImage {
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if *px == background {
            continue;
        }
        bbox = Some(match bbox {
            None => (x, y, x, y),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
        });
    }
    let Some((l, t, r, b)) = bbox else {
        return img.clone();
    };
    let l = l.saturating_sub(pad);
    let t = t.saturating_sub(pad);
    let r = r.saturating_add(pad).min(img.width() - 1);
    let b = b.saturating_add(pad).min(img.height() - 1);
    imageops::crop_imm(img, l, t, r - l + 1, b - t + 1).to_image()
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write `bytes` to `path` through a temp file in the same directory, so the
/// destination is either the old file or the complete new one.
/// Creates the parent directory if needed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| RenderError::io(dir, e))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| RenderError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| RenderError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| RenderError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn crop_to_content_plus_pad() {
        let mut img = RgbaImage::from_pixel(100, 80, WHITE);
        img.put_pixel(40, 30, Rgba([0, 0, 0, 255]));
        img.put_pixel(60, 50, Rgba([0, 0, 0, 255]));
        let out = tight_crop(&img, WHITE, 5);
        assert_eq!(out.dimensions(), (31, 31));
        assert_eq!(*out.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn huge_pad_keeps_whole_image() {
        let mut img = RgbaImage::from_pixel(12, 8, WHITE);
        img.put_pixel(6, 4, Rgba([0, 0, 0, 255]));
        let out = tight_crop(&img, WHITE, u32::MAX);
        assert_eq!(out.dimensions(), (12, 8));
    }

    #[test]
    fn pad_is_clamped_to_image() {
        let mut img = RgbaImage::from_pixel(10, 10, WHITE);
        img.put_pixel(0, 9, Rgba([1, 2, 3, 255]));
        let out = tight_crop(&img, WHITE, 4);
        assert_eq!(out.dimensions(), (5, 5));
    }

    #[test]
    fn blank_image_is_untouched() {
        let img = RgbaImage::from_pixel(7, 3, WHITE);
        assert_eq!(tight_crop(&img, WHITE, 2).dimensions(), (7, 3));
    }

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.bin");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        let leftovers = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
