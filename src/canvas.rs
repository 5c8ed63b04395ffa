use image::{Rgb, RgbImage};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A buffer of color data, with the top-left being `(0,0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<Color>,
}

/// An iterator for the rows of the image, starting at the top and working down.
pub struct Rows<'a> {
    canvas: &'a Canvas,
    row: usize,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb<u8>> for Color {
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self::new(r, g, b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.channels())
    }
}

impl Canvas {
    /// Construct a new [`Canvas`] filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            buffer: vec![fill; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of pixels in the [`Canvas`].
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (self.width as usize) * y + x
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize
    }

    /// Mutate a color in the [`Canvas`].
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Color> {
        if !self.contains(x, y) {
            return None;
        }
        let ix = self.index(x, y);
        Some(&mut self.buffer[ix])
    }

    /// Fetch a color in the [`Canvas`].
    pub fn get(&self, x: usize, y: usize) -> Option<&Color> {
        if !self.contains(x, y) {
            return None;
        }
        Some(&self.buffer[self.index(x, y)])
    }

    /// Fill every pixel of row `y`. Rows outside the canvas are ignored.
    pub fn fill_row(&mut self, y: usize, color: Color) {
        if y >= self.height as usize {
            return;
        }
        let len = self.width as usize;
        let start = y * len;
        self.buffer[start..start + len].fill(color);
    }

    /// Fill every pixel of column `x`. Columns outside the canvas are ignored.
    pub fn fill_column(&mut self, x: usize, color: Color) {
        if x >= self.width as usize {
            return;
        }
        let len = self.width as usize;
        for px in self.buffer.iter_mut().skip(x).step_by(len) {
            *px = color;
        }
    }

    /// Draw a one pixel high horizontal line on row `y` covering columns `x0..=x1`, clipped to
    /// the canvas.
    pub fn draw_hline(&mut self, y: usize, x0: usize, x1: usize, color: Color) {
        if y >= self.height as usize || self.width == 0 || x0 > x1 {
            return;
        }
        let last = x1.min(self.width as usize - 1);
        for x in x0..=last {
            let ix = self.index(x, y);
            self.buffer[ix] = color;
        }
    }

    /// Return an iterator to the rows of the image.
    pub fn rows(&self) -> Rows {
        Rows {
            canvas: self,
            row: 0,
        }
    }

    /// Return raw image RGB8 data for the image, top row first.
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.len() * 3);

        for row in self.rows() {
            for color in row {
                data.extend_from_slice(&color.channels())
            }
        }

        data
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.buffer[self.index(x as usize, y as usize)].into()
        })
    }

    pub fn from_image(img: &RgbImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            buffer: img.pixels().map(|px| Color::from(*px)).collect(),
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [Color];

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.canvas.height as usize {
            return None;
        }

        let len = self.canvas.width as usize;
        let start = self.row * len;
        self.row += 1;

        Some(&self.canvas.buffer[start..start + len])
    }
}
