//! Binary edge mask: the input boundary of the detector.
//!
//! The preprocessing stage (binarization, contrast stretching, morphological
//! edge extraction) lives outside this crate and hands over either a boolean
//! grid or an 8-bit image where bright pixels mark edges.
use super::traits::ImageView;
use super::ImageU8;

/// Grayscale level at or above which a pixel counts as an edge.
pub const DEFAULT_EDGE_THRESHOLD: u8 = 0x80;

/// Row-major `width × height` grid of booleans, `true` meaning edge pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl EdgeMask {
    /// All-`false` mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a mask by evaluating `is_edge(x, y)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut is_edge: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(is_edge(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Threshold a grayscale view: pixels `>= threshold` become edges.
    pub fn from_gray(gray: &ImageU8<'_>, threshold: u8) -> Self {
        let mut cells = Vec::with_capacity(gray.w * gray.h);
        for row in gray.rows() {
            cells.extend(row.iter().map(|&px| px >= threshold));
        }
        Self {
            width: gray.w,
            height: gray.h,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, used to normalize coverage features.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let idx = y * self.width + x;
        self.cells[idx] = value;
    }

    /// Sets the cell when `(x, y)` falls inside the mask; ignores it otherwise.
    pub fn set_checked(&mut self, x: i64, y: i64, value: bool) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.set(x as usize, y as usize, value);
        true
    }

    /// Number of `true` cells.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl ImageView for EdgeMask {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[bool]> {
        Some(&self.cells)
    }
}
