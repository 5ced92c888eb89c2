//! Greedy label wrapping for tile names.

/// Estimated width of one character in pixels, matching the chart's
/// width-derived capacity of `tile_width / 6` characters per line.
///
/// This is a deliberate approximation, not a font metric; the visual
/// contract of the chart is defined in terms of it.
pub const CHAR_WIDTH: f32 = 6.0;

/// Break `name` into lines that fit `available_width`.
///
/// Words (whitespace-separated) are packed greedily: a word that would
/// push the current line's estimated width past the available width
/// starts a new line. Words are never split, so a single word wider
/// than the line stands alone. Always returns at least one line; an
/// empty name yields `[""]`.
#[must_use]
pub fn wrap_label(name: &str, available_width: f32, char_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in name.split_whitespace() {
        let tentative_len = if line.is_empty() {
            word.len()
        } else {
            line.len() + 1 + word.len()
        };
        if !line.is_empty() && estimated_width(tentative_len, char_width) > available_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
    }
    lines.push(line);
    lines
}

fn estimated_width(chars: usize, char_width: f32) -> f32 {
    chars as f32 * char_width
}
