//! Immediate-mode 2D drawing surface.
//!
//! The capability set is deliberately small: rectangles, circles, centred
//! text and text measurement. Anything that can draw those can host a layout.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub const WHITE: Color = Color::gray(0xff);
    pub const BLACK: Color = Color::gray(0x00);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle` (radians, y grows downward).
    pub fn polar(self, angle: f64, radius: f64) -> Self {
        Self::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Outline colour and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    /// The 1-unit hairline used for future weeks.
    pub const fn hairline(color: Color) -> Self {
        Self { color, width: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
}

impl FontFamily {
    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub family: FontFamily,
}

impl TextStyle {
    pub const fn serif(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::Serif,
        }
    }
}

/// Width of a run of text in surface units.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64;
}

pub trait Surface: TextMeasure {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke);
    /// Draw text horizontally centred on `at.x` and vertically middled on `at.y`.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle, color: Color);

    /// Paint the whole `width` × `height` area with `color`.
    fn clear(&mut self, width: f64, height: f64, color: Color) {
        self.fill_rect(Rect::new(0.0, 0.0, width, height), color);
    }
}
