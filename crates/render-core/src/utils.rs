/// Base font every report uses.
pub const BASE_FONT: &str = "Helvetica";

/// Get PDF font name with weight suffix
pub fn styled_font_name(base_name: &str, bold: bool) -> String {
    if bold {
        format!("{}-Bold", base_name)
    } else {
        base_name.to_string()
    }
}

/// Characters WinAnsiEncoding places at 0x80..=0x9F, where Latin-1 has C1
/// controls. `None` marks the five unassigned codes.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// Encodes one character for a WinAnsiEncoding font, if it has a code.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u8),
        // Tab, newline and carriage return pass through; other controls do not.
        0x09 | 0x0A | 0x0D => Some(c as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|mapped| *mapped == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Encodes text for a WinAnsiEncoding font. Characters outside the encoding
/// become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_text_stays_single_byte() {
        assert_eq!(to_win_ansi("Sí"), vec![b'S', 0xED]);
        assert_eq!(to_win_ansi("Promoción"), b"Promoci\xF3n".to_vec());
        assert_eq!(styled_font_name(BASE_FONT, true), "Helvetica-Bold");
    }

    #[test]
    fn windows_1252_range_is_mapped() {
        assert_eq!(to_win_ansi("€15"), vec![0x80, b'1', b'5']);
        assert_eq!(to_win_ansi("\u{2014}\u{201C}x\u{201D}"), vec![0x97, 0x93, b'x', 0x94]);
        assert_eq!(win_ansi_byte('\u{0178}'), Some(0x9F));
        // C1 controls have no glyph in WinAnsi.
        assert_eq!(to_win_ansi("\u{0080}\u{0093}"), vec![b'?', b'?']);
        assert_eq!(to_win_ansi("\u{3042}"), vec![b'?']);
    }
}
