//! Glyph metrics of the standard Helvetica font and greedy line breaking.
//!
//! Widths are the AFM advance widths (1/1000 em) for printable ASCII. Anything
//! outside that range (accented Latin letters mostly) is measured as a
//! lowercase letter.

const FIRST_CHAR: u32 = 32;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

const FALLBACK_WIDTH: u16 = 556;

/// Helvetica-Bold runs roughly this much wider than the regular face.
const BOLD_FACTOR: f32 = 1.06;

fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (FIRST_CHAR..FIRST_CHAR + HELVETICA_WIDTHS.len() as u32).contains(&code) {
        HELVETICA_WIDTHS[(code - FIRST_CHAR) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Advance width of `text` at `font_size`, in the same unit as `font_size`.
pub fn text_width(text: &str, font_size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    let width = units as f32 / 1000.0 * font_size;
    if bold { width * BOLD_FACTOR } else { width }
}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Breaks happen at whitespace; a single word wider than the line is split
/// between characters. Explicit newlines are honored. Always returns at least
/// one line, so an empty cell still occupies a line box.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32, bold: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if text_width(&candidate, font_size, bold) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if text_width(word, font_size, bold) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = split_word(word, max_width, font_size, bold);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(current);
    }
    lines
}

fn split_word(word: &str, max_width: f32, font_size: f32, bold: bool) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if current.chars().count() > 1 && text_width(&current, font_size, bold) > max_width {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    pieces.push(current);
    pieces
}
