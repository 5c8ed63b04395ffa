use crate::{
    canvas::{Canvas, Color},
    utils::{mix, truncate_channel},
};

/// The axis that the gradient varies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Each row has a single color, changing from top to bottom.
    Vertical,

    /// Each column has a single color, changing from left to right.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSpec {
    pub width: u32,
    pub height: u32,
    pub start: Color,
    pub end: Color,
    pub orientation: Orientation,
}

impl GradientSpec {
    pub fn new(width: u32, height: u32, start: Color, end: Color, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            start,
            end,
            orientation,
        }
    }

    /// The number of steps along the varying axis.
    pub fn steps(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    /// The interpolation ratio for step `i`. This is `i / steps`, so the last step stops short of
    /// `1.0` and the end color is never reached exactly.
    pub fn ratio(&self, i: u32) -> f64 {
        f64::from(i) / f64::from(self.steps())
    }

    /// The color for step `i` along the varying axis.
    pub fn color_at(&self, i: u32) -> Color {
        lerp(&self.start, &self.end, self.ratio(i))
    }
}

/// Interpolate each channel independently, truncating the result.
pub fn lerp(start: &Color, end: &Color, ratio: f64) -> Color {
    let channel = |s: u8, e: u8| truncate_channel(mix(f64::from(s), f64::from(e), ratio));
    Color::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}

/// Render the gradient described by `spec` into a new [`Canvas`].
pub fn rasterize(spec: &GradientSpec) -> Canvas {
    let mut canvas = Canvas::new(spec.width, spec.height, spec.start);

    log::debug!(
        "rasterizing {}x{} {:?} gradient",
        spec.width,
        spec.height,
        spec.orientation
    );

    for i in 0..spec.steps() {
        let color = spec.color_at(i);
        match spec.orientation {
            Orientation::Vertical => canvas.fill_row(i as usize, color),
            Orientation::Horizontal => canvas.fill_column(i as usize, color),
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVY: Color = Color::new(15, 23, 42);
    const PURPLE: Color = Color::new(49, 46, 129);

    fn expected(start: u8, end: u8, i: u32, n: u32) -> u8 {
        let ratio = i as f64 / n as f64;
        (start as f64 * (1.0 - ratio) + end as f64 * ratio) as u8
    }

    fn expected_color(start: &Color, end: &Color, i: u32, n: u32) -> Color {
        Color::new(
            expected(start.r, end.r, i, n),
            expected(start.g, end.g, i, n),
            expected(start.b, end.b, i, n),
        )
    }

    #[test]
    fn test_buffer_size() {
        for (w, h) in [(1, 1), (7, 3), (164, 314), (150, 57)] {
            for orientation in [Orientation::Vertical, Orientation::Horizontal] {
                let c = rasterize(&GradientSpec::new(w, h, NAVY, PURPLE, orientation));
                assert_eq!(c.len(), (w * h) as usize);
                assert_eq!(c.width(), w);
                assert_eq!(c.height(), h);
            }
        }
    }

    #[test]
    fn test_vertical_rows() {
        let spec = GradientSpec::new(164, 314, NAVY, PURPLE, Orientation::Vertical);
        let c = rasterize(&spec);

        for (i, row) in c.rows().enumerate() {
            let want = expected_color(&NAVY, &PURPLE, i as u32, 314);
            assert!(row.iter().all(|px| *px == want), "row {} is not uniform", i);
        }
    }

    #[test]
    fn test_horizontal_columns() {
        let spec = GradientSpec::new(150, 57, NAVY, PURPLE, Orientation::Horizontal);
        let c = rasterize(&spec);

        for x in 0..150 {
            let want = expected_color(&NAVY, &PURPLE, x, 150);
            for y in 0..57 {
                assert_eq!(c.get(x as usize, y), Some(&want));
            }
        }
    }

    #[test]
    fn test_header_column_values() {
        let spec = GradientSpec::new(150, 57, NAVY, PURPLE, Orientation::Horizontal);
        let c = rasterize(&spec);
        assert_eq!(c.get(0, 0), Some(&NAVY));
        assert_eq!(c.get(75, 0), Some(&Color::new(32, 34, 85)));
        assert_eq!(c.get(75, 56), Some(&Color::new(32, 34, 85)));
    }

    #[test]
    fn test_first_and_last_step() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let spec = GradientSpec::new(150, 57, NAVY, PURPLE, orientation);
            let n = spec.steps();
            assert_eq!(spec.ratio(0), 0.0);
            assert!(spec.ratio(n - 1) < 1.0);
            assert_eq!(spec.color_at(0), NAVY);

            let last = spec.color_at(n - 1);
            assert_ne!(last.r, PURPLE.r);
            assert_ne!(last.g, PURPLE.g);
            assert_ne!(last.b, PURPLE.b);
        }
    }

    #[test]
    fn test_monotonic() {
        let check = |start: Color, end: Color| {
            let spec = GradientSpec::new(10, 314, start, end, Orientation::Vertical);
            let colors: Vec<_> = (0..spec.steps()).map(|i| spec.color_at(i)).collect();
            for pair in colors.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                for (ca, cb, s, e) in [
                    (a.r, b.r, start.r, end.r),
                    (a.g, b.g, start.g, end.g),
                    (a.b, b.b, start.b, end.b),
                ] {
                    if s < e {
                        assert!(ca <= cb);
                    } else {
                        assert!(ca >= cb);
                    }
                }
            }
        };

        check(NAVY, PURPLE);
        check(PURPLE, NAVY);
        check(Color::white(), Color::black());
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 42 * 0.5 + 129 * 0.5 = 85.5
        assert_eq!(lerp(&NAVY, &PURPLE, 0.5).b, 85);
        // 0 * 0.75 + 255 * 0.25 = 63.75
        assert_eq!(lerp(&Color::black(), &Color::white(), 0.25), Color::new(63, 63, 63));
    }
}
