//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into a color buffer with bounds-checked access.

/// A view into an ARGB8888 color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass the buffer + dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Set a pixel; out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Fill the inclusive span `[x_start, x_end]` of row `y`, clipped to the buffer.
    #[inline]
    pub fn fill_scanline(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_start = x_start.max(0);
        let x_end = x_end.min(self.width as i32 - 1);
        if x_start > x_end {
            return;
        }
        let row = (y as u32 * self.width) as usize;
        self.color_buffer[row + x_start as usize..=row + x_end as usize].fill(color);
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut data = vec![0u32; 4 * 3];
        let mut fb = FrameBuffer::new(&mut data, 4, 3);
        fb.set_pixel(-1, 0, 7);
        fb.set_pixel(4, 0, 7);
        fb.set_pixel(0, 3, 7);
        fb.set_pixel(3, 2, 7);
        assert_eq!(fb.get_pixel(3, 2), Some(7));
        assert_eq!(fb.get_pixel(4, 2), None);
        assert_eq!(data.iter().filter(|&&c| c == 7).count(), 1);
    }

    #[test]
    fn scanline_is_clipped_to_row() {
        let mut data = vec![0u32; 4 * 2];
        let mut fb = FrameBuffer::new(&mut data, 4, 2);
        fb.fill_scanline(1, -5, 10, 1);
        fb.fill_scanline(5, 0, 3, 2);
        fb.fill_scanline(0, 3, 1, 3);
        assert_eq!(data, vec![0, 0, 0, 0, 1, 1, 1, 1]);
    }
}
