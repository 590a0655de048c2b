use crate::error::PackError;

/// Sample value of a black pixel after 1-bit reduction.
pub const BLACK: u8 = 0;
/// Sample value of a white pixel after 1-bit reduction.
pub const WHITE: u8 = 255;

/// Binarized image with row-major samples.
///
/// A sample is black iff it equals [`BLACK`]; any other value reads as white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid from existing samples.
    ///
    /// Both dimensions must be non-zero and `samples` must hold exactly
    /// `width * height` values.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, PackError> {
        if width == 0 || height == 0 {
            return Err(PackError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(PackError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, PackError> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Get the sample at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.samples[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn is_black(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_exact_sample_count() {
        let grid = PixelGrid::new(3, 2, vec![0, 255, 0, 255, 0, 255]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.samples().len(), 6);
    }

    #[test]
    fn new_rejects_zero_width() {
        let err = PixelGrid::new(0, 4, Vec::new()).unwrap_err();
        assert_eq!(err, PackError::InvalidDimensions { width: 0, height: 4 });
    }

    #[test]
    fn new_rejects_zero_height() {
        let err = PixelGrid::new(4, 0, Vec::new()).unwrap_err();
        assert_eq!(err, PackError::InvalidDimensions { width: 4, height: 0 });
    }

    #[test]
    fn new_rejects_wrong_sample_count() {
        let err = PixelGrid::new(2, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            PackError::SampleCountMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn get_is_row_major() {
        let grid = PixelGrid::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(2, 0), 3);
        assert_eq!(grid.get(0, 1), 4);
        assert_eq!(grid.get(2, 1), 6);
    }

    #[test]
    fn only_zero_reads_as_black() {
        let grid = PixelGrid::new(3, 1, vec![BLACK, 1, WHITE]).unwrap();
        assert!(grid.is_black(0, 0));
        assert!(!grid.is_black(1, 0));
        assert!(!grid.is_black(2, 0));
    }
}
