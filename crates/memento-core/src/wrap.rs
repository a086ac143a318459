use crate::surface::{TextMeasure, TextStyle};

/// Greedy word wrap. Lines never split a word; a single word wider than
/// `max_width` gets a line of its own.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    max_width: f64,
    style: &TextStyle,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = format!("{current}{word} ");
        if measure.measure_text(&candidate, style) > max_width && !current.is_empty() {
            lines.push(current.trim().to_string());
            current = format!("{word} ");
        } else {
            current = candidate;
        }
    }

    if !current.trim().is_empty() {
        lines.push(current.trim().to_string());
    }
    lines
}
