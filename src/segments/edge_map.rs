use crate::image::EdgeMask;

/// Mutable edge map with a live count of remaining edge cells.
///
/// `set` keeps the count in sync, so callers must never bypass it.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    edge_count: usize,
    /// Every index below the cursor is known to be cleared.
    cursor: usize,
}

impl EdgeMap {
    pub fn from_mask(mask: &EdgeMask) -> Self {
        let cells = mask.cells().to_vec();
        let edge_count = cells.iter().filter(|&&c| c).count();
        Self {
            width: mask.width(),
            height: mask.height(),
            cells,
            edge_count,
            cursor: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_edge(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    #[inline]
    pub fn set(&mut self, idx: usize, value: bool) {
        let old = self.cells[idx];
        if old == value {
            return;
        }
        self.cells[idx] = value;
        if value {
            self.edge_count += 1;
            self.cursor = self.cursor.min(idx);
        } else {
            self.edge_count -= 1;
        }
    }

    /// Linear index of the first remaining edge cell in row-major order.
    pub fn first_edge(&mut self) -> Option<usize> {
        if self.edge_count == 0 {
            return None;
        }
        while self.cursor < self.cells.len() {
            if self.cells[self.cursor] {
                return Some(self.cursor);
            }
            self.cursor += 1;
        }
        debug_assert!(false, "edge_count > 0 but no edge cell found");
        None
    }
}
