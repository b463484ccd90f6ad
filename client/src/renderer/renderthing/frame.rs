pub const PIXEL_BYTES: usize = 4;

pub type Color = [u8; PIXEL_BYTES];

/// A borrowed RGBA framebuffer, `width * height` pixels, row by row.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        self.buffer
            .chunks_exact_mut(PIXEL_BYTES)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&Color> {
        let index = self.pixel_index(x, y)?;
        self.buffer.get(index..index + PIXEL_BYTES)?.try_into().ok()
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut Color> {
        let index = self.pixel_index(x, y)?;
        self.buffer
            .get_mut(index..index + PIXEL_BYTES)?
            .try_into()
            .ok()
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    /// Fills a rectangle, clipped to the frame.
    pub fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for y in y..y_end {
            for x in x..x_end {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((x as usize + y as usize * self.width as usize) * PIXEL_BYTES)
    }
}
