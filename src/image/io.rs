//! I/O helpers for edge images, overlays and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `load_edge_mask`: read an image and threshold it into an [`EdgeMask`].
//! - `save_edge_mask`: write a mask as a black/white PNG.
//! - `save_overlay`: draw sampled ellipse boundaries in red over a mask.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{EdgeMask, ImageU8, ImageView};
use crate::ellipse::EllipseGeometry;
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

const EDGE_RGB: Rgb<u8> = Rgb([255, 255, 255]);
const ELLIPSE_RGB: Rgb<u8> = Rgb([255, 0, 0]);

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw, tightly packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Load an edge image; pixels at or above `threshold` are edges.
pub fn load_edge_mask(path: &Path, threshold: u8) -> Result<EdgeMask, String> {
    let gray = load_grayscale_image(path)?;
    Ok(EdgeMask::from_gray(&gray.as_view(), threshold))
}

/// Save a mask as an 8-bit PNG (edges white).
pub fn save_edge_mask(mask: &EdgeMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &edge) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([if edge { 255 } else { 0 }]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Render the mask and each ellipse's rotated outline to an RGB PNG.
pub fn save_overlay(
    mask: &EdgeMask,
    ellipses: &[EllipseGeometry],
    boundary_samples: usize,
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (mask.width() as u32, mask.height() as u32);
    let mut out = RgbImage::new(w, h);
    for (y, row) in mask.rows().enumerate() {
        for (x, &edge) in row.iter().enumerate() {
            if edge {
                out.put_pixel(x as u32, y as u32, EDGE_RGB);
            }
        }
    }
    for ellipse in ellipses {
        for p in ellipse.outline_points(boundary_samples) {
            let x = p.x.round();
            let y = p.y.round();
            if x >= 0.0 && y >= 0.0 && (x as u32) < w && (y as u32) < h {
                out.put_pixel(x as u32, y as u32, ELLIPSE_RGB);
            }
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
