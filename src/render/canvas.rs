//=========================================================================
// Canvas
//
// CPU pixel buffer in the 0x00RRGGBB format the presentation surface
// expects. All drawing calls clip to the buffer bounds.
//
//=========================================================================

/// Packed 0x00RRGGBB colour.
pub type Rgb = u32;

pub mod colors {
    use super::Rgb;

    pub const WHITE: Rgb = 0x00FF_FFFF;
    pub const BLACK: Rgb = 0x0000_0000;
    pub const GAINSBORO: Rgb = 0x00DC_DCDC;
    pub const LIGHT_GREEN: Rgb = 0x0090_EE90;
    pub const ORANGE_RED: Rgb = 0x00FF_4500;
    pub const DEEP_SKY_BLUE: Rgb = 0x0000_BFFF;
}

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BLACK; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    #[inline]
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fills the `w` x `h` rectangle at `(x, y)`, clipped.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }

        for row in y..y_end {
            let start = (row * self.width + x) as usize;
            let end = (row * self.width + x_end) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Fills a disc of `radius` centred on `(cx, cy)`, clipped.
    pub fn fill_circle(&mut self, cx: u32, cy: u32, radius: u32, color: Rgb) {
        let r = radius as i64;
        let (cx, cy) = (cx as i64, cy as i64);

        for dy in -r..=r {
            let y = cy + dy;
            if y < 0 || y >= self.height as i64 {
                continue;
            }
            // Widest dx with dx² + dy² <= r².
            let span = ((r * r - dy * dy) as f64).sqrt() as i64;
            let x0 = (cx - span).max(0);
            let x1 = (cx + span).min(self.width as i64 - 1);
            if x0 > x1 {
                continue;
            }
            let row = y as usize * self.width as usize;
            self.pixels[row + x0 as usize..=row + x1 as usize].fill(color);
        }
    }

    /// Copies the canvas into `target` (`target_width` pixels per row),
    /// clipping to the overlap and filling the rest with `background`.
    pub fn blit_into(&self, target: &mut [Rgb], target_width: u32, background: Rgb) {
        if target_width == 0 {
            return;
        }
        target.fill(background);

        let copy_width = self.width.min(target_width) as usize;
        let target_rows = target.len() / target_width as usize;
        let copy_rows = (self.height as usize).min(target_rows);

        for row in 0..copy_rows {
            let src = row * self.width as usize;
            let dst = row * target_width as usize;
            target[dst..dst + copy_width].copy_from_slice(&self.pixels[src..src + copy_width]);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
