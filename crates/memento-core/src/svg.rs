//! SVG rendering surface.
//!
//! Drawing calls append elements to an in-memory document; `finish` closes it.
//! Text width is estimated from glyph classes since there is no font engine.

use std::fmt::Write;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::surface::{Color, Point, Rect, Stroke, Surface, TextMeasure, TextStyle};

/// Average advance widths as a fraction of font size.
mod advance {
    pub const SPACE: f64 = 0.25;
    pub const NARROW: f64 = 0.28;
    pub const WIDE: f64 = 0.72;
    pub const UPPER: f64 = 0.66;
    pub const DEFAULT: f64 = 0.5;
}

pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Number of drawing elements emitted so far.
    pub fn element_count(&self) -> usize {
        self.body.lines().count()
    }

    /// Complete SVG document.
    pub fn finish(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

/// Two decimals, trailing zeros trimmed.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn glyph_advance(c: char) -> f64 {
    match c {
        ' ' => advance::SPACE,
        'i' | 'j' | 'l' | 't' | 'f' | 'r' | 'I' | '.' | ',' | ';' | ':' | '\'' | '!' | '|' => {
            advance::NARROW
        }
        'm' | 'w' | 'M' | 'W' => advance::WIDE,
        c if c.is_uppercase() => advance::UPPER,
        _ => advance::DEFAULT,
    }
}

impl TextMeasure for SvgSurface {
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().map(glyph_advance).sum::<f64>() * style.size
    }
}

impl Surface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}"/>"#,
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height),
        );
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height),
            stroke.color,
            fmt_num(stroke.width),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{color}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            stroke.color,
            fmt_num(stroke.width),
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{color}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            style.family.css_name(),
            fmt_num(style.size),
            escape(text),
        );
    }
}
