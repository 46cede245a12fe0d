//! Minimal raster drawing on top of `image::RgbaImage`.
//!
//! Coordinates follow the HTML canvas conventions the certificate layout was
//! designed with: strokes are centred on their path and text is anchored at
//! its baseline.

use image::{Rgba, RgbaImage};

use super::font;

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Text style: pixel size, weight and colour.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: u32,
    pub bold: bool,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn regular(size: u32, color: Rgb) -> Self {
        Self {
            size,
            bold: false,
            color,
        }
    }

    pub const fn bold(size: u32, color: Rgb) -> Self {
        Self {
            size,
            bold: true,
            color,
        }
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color.to_rgba());
    }

    /// Fill the whole canvas with a gradient running from the top-left to the
    /// bottom-right corner. `stops` are `(offset, colour)` pairs sorted by offset.
    pub fn fill_diagonal_gradient(&mut self, stops: &[(f32, Rgb)]) {
        let Some(&(_, first)) = stops.first() else {
            return;
        };
        let (width, height) = (self.width() as f32, self.height() as f32);
        let length_sq = width * width + height * height;

        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            let t = ((x as f32 * width + y as f32 * height) / length_sq).clamp(0.0, 1.0);
            *pixel = gradient_at(stops, first, t).to_rgba();
        }
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgb) {
        for py in y..y + height {
            for px in x..x + width {
                self.put(px, py, color);
            }
        }
    }

    /// Outline a rectangle with a stroke of `line_width` centred on its edges.
    pub fn stroke_rect(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        line_width: i64,
        color: Rgb,
    ) {
        let half = line_width / 2;
        let outer_x = x - half;
        let outer_y = y - half;
        let outer_w = width + line_width;
        let outer_h = height + line_width;

        self.fill_rect(outer_x, outer_y, outer_w, line_width, color);
        self.fill_rect(outer_x, y + height - half, outer_w, line_width, color);
        self.fill_rect(outer_x, outer_y, line_width, outer_h, color);
        self.fill_rect(x + width - half, outer_y, line_width, outer_h, color);
    }

    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: f32, color: Rgb) {
        let reach = radius.ceil() as i64;
        for py in cy - reach..=cy + reach {
            for px in cx - reach..=cx + reach {
                if distance(px, py, cx as f32, cy as f32) <= radius {
                    self.put(px, py, color);
                }
            }
        }
    }

    pub fn stroke_circle(&mut self, cx: i64, cy: i64, radius: f32, line_width: f32, color: Rgb) {
        let half = line_width / 2.0;
        let reach = (radius + half).ceil() as i64;
        for py in cy - reach..=cy + reach {
            for px in cx - reach..=cx + reach {
                let d = distance(px, py, cx as f32, cy as f32);
                if (d - radius).abs() <= half {
                    self.put(px, py, color);
                }
            }
        }
    }

    /// Stroke connected line segments through `points`.
    pub fn stroke_polyline(&mut self, points: &[(i64, i64)], line_width: f32, color: Rgb) {
        let half = line_width / 2.0;
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let reach = half.ceil() as i64;
            let (min_x, max_x) = (a.0.min(b.0) - reach, a.0.max(b.0) + reach);
            let (min_y, max_y) = (a.1.min(b.1) - reach, a.1.max(b.1) + reach);

            for py in min_y..=max_y {
                for px in min_x..=max_x {
                    if distance_to_segment(px, py, a, b) <= half {
                        self.put(px, py, color);
                    }
                }
            }
        }
    }

    /// Draw `text` horizontally centred on `cx` with its baseline at `baseline`.
    pub fn fill_text_centered(&mut self, text: &str, cx: i64, baseline: i64, style: TextStyle) {
        let scale = font::scale_for_size(style.size);
        let width = i64::from(font::text_width(text, scale));
        let left = cx - width / 2;
        let top = baseline - i64::from(font::GLYPH_HEIGHT * scale);

        self.draw_text(text, left, top, scale, style.color);
        if style.bold {
            let offset = i64::from((scale / 2).max(1));
            self.draw_text(text, left + offset, top, scale, style.color);
        }
    }

    fn draw_text(&mut self, text: &str, left: i64, top: i64, scale: u32, color: Rgb) {
        let scale = i64::from(scale);
        let advance = i64::from(font::GLYPH_ADVANCE) * scale;

        for (position, c) in text.chars().enumerate() {
            let origin_x = left + position as i64 * advance;
            for (row, bits) in font::glyph(c).iter().enumerate() {
                for column in 0..font::GLYPH_WIDTH {
                    if bits & (1 << (font::GLYPH_WIDTH - 1 - column)) == 0 {
                        continue;
                    }
                    let x = origin_x + i64::from(column) * scale;
                    let y = top + row as i64 * scale;
                    self.fill_rect(x, y, scale, scale, color);
                }
            }
        }
    }
}

fn gradient_at(stops: &[(f32, Rgb)], first: Rgb, t: f32) -> Rgb {
    let mut previous = (0.0, first);
    for &(offset, color) in stops {
        if t <= offset {
            let span = offset - previous.0;
            if span <= f32::EPSILON {
                return color;
            }
            return previous.1.lerp(color, (t - previous.0) / span);
        }
        previous = (offset, color);
    }
    previous.1
}

fn distance(px: i64, py: i64, cx: f32, cy: f32) -> f32 {
    let dx = px as f32 - cx;
    let dy = py as f32 - cy;
    (dx * dx + dy * dy).sqrt()
}

fn distance_to_segment(px: i64, py: i64, a: (i64, i64), b: (i64, i64)) -> f32 {
    let (ax, ay) = (a.0 as f32, a.1 as f32);
    let (bx, by) = (b.0 as f32, b.1 as f32);
    let (dx, dy) = (bx - ax, by - ay);
    let length_sq = dx * dx + dy * dy;

    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((px as f32 - ax) * dx + (py as f32 - ay) * dy) / length_sq).clamp(0.0, 1.0)
    };
    distance(px, py, ax + t * dx, ay + t * dy)
}
