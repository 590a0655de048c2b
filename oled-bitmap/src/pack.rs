//! Page-based vertical packing for SSD1306-class displays.
//!
//! Rows are grouped into pages of eight. Each page contributes one byte per
//! column, and bit `b` of that byte holds row `8 * page + b`. Bytes are
//! emitted page by page, left to right within a page.

use crate::grid::PixelGrid;

/// Number of pixel rows covered by one page.
pub const PAGE_HEIGHT: u32 = 8;

/// Packed output of [`pack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pages, counting a trailing partial page.
    pub fn pages(&self) -> u32 {
        self.height.div_ceil(PAGE_HEIGHT)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The `width` bytes belonging to page `p`, or `None` past the last page.
    pub fn page(&self, p: u32) -> Option<&[u8]> {
        let w = self.width as usize;
        let start = p as usize * w;
        self.bytes.get(start..start + w)
    }
}

/// Byte count of a packed bitmap: `width * ceil(height / 8)`.
pub fn packed_len(width: u32, height: u32) -> usize {
    width as usize * height.div_ceil(PAGE_HEIGHT) as usize
}

/// Pack a binarized grid into page-major, column-minor bytes.
///
/// Black samples set their bit. Bits for rows past the bottom of the image
/// on the last page stay clear.
pub fn pack(grid: &PixelGrid) -> PackedBitmap {
    let w = grid.width();
    let h = grid.height();
    let mut bytes = Vec::with_capacity(packed_len(w, h));

    for page in 0..h.div_ceil(PAGE_HEIGHT) {
        let y0 = page * PAGE_HEIGHT;
        for x in 0..w {
            let mut byte = 0u8;
            for bit in 0..PAGE_HEIGHT {
                let y = y0 + bit;
                if y < h && grid.is_black(x, y) {
                    byte |= 1 << bit;
                }
            }
            bytes.push(byte);
        }
    }

    PackedBitmap {
        width: w,
        height: h,
        bytes,
    }
}
