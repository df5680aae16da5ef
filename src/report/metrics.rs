//! Text measurement for the built-in Helvetica faces used by the PDF report

/// Font faces the report draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

const PT_TO_MM: f64 = 25.4 / 72.0;

// Glyph advance widths in 1/1000 em for the printable ASCII range (32..=126),
// taken from the Adobe AFM files for Helvetica and Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(c: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 32],
        // Bullet has the same advance in both faces
        '\u{2022}' => 350,
        _ => 556,
    }
}

/// Width of a string in millimeters at the given size
pub fn text_width_mm(text: &str, size_pt: f64, style: FontStyle) -> f64 {
    let milli: u32 = text.chars().map(|c| glyph_width(c, style) as u32).sum();
    milli as f64 / 1000.0 * size_pt * PT_TO_MM
}

/// Greedy word wrap into lines no wider than `max_width_mm`
///
/// Explicit newlines force a break, words never straddle lines, and a single
/// word wider than the line is hard-broken at the character that overflows.
pub fn wrap_text(text: &str, size_pt: f64, style: FontStyle, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, size_pt, style, max_width_mm, &mut lines);
    }
    lines
}

fn wrap_segment(
    segment: &str,
    size_pt: f64,
    style: FontStyle,
    max_width_mm: f64,
    lines: &mut Vec<String>,
) {
    let words: Vec<&str> = segment.split_whitespace().collect();
    if words.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    for word in words {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width_mm(&candidate, size_pt, style) <= max_width_mm {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width_mm(word, size_pt, style) <= max_width_mm {
            current = word.to_string();
        } else {
            current = break_long_word(word, size_pt, style, max_width_mm, lines);
        }
    }
    lines.push(current);
}

// Splits a word that cannot fit on a line by itself; returns the final chunk
// so following words can still join it.
fn break_long_word(
    word: &str,
    size_pt: f64,
    style: FontStyle,
    max_width_mm: f64,
    lines: &mut Vec<String>,
) -> String {
    let mut chunk = String::new();
    for c in word.chars() {
        let mut candidate = chunk.clone();
        candidate.push(c);
        if !chunk.is_empty() && text_width_mm(&candidate, size_pt, style) > max_width_mm {
            lines.push(chunk);
            chunk = c.to_string();
        } else {
            chunk = candidate;
        }
    }
    chunk
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_matches_afm_table() {
        // H (722) + i (222) at 10pt: 0.944 * 10pt in mm
        let expected = 9.44 * 25.4 / 72.0;
        assert!((text_width_mm("Hi", 10.0, FontStyle::Regular) - expected).abs() < 1e-9);
        // Bold digits are the same width as regular digits
        assert_eq!(
            text_width_mm("2024", 10.0, FontStyle::Regular),
            text_width_mm("2024", 10.0, FontStyle::Bold),
        );
    }

    #[test]
    fn test_wrap_keeps_words_intact() {
        let text = "Led development of microservices architecture using Python and Docker";
        let lines = wrap_text(text, 10.0, FontStyle::Regular, 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, FontStyle::Regular) <= 40.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_single_line_when_it_fits() {
        let lines = wrap_text("Short summary", 10.0, FontStyle::Regular, 170.0);
        assert_eq!(lines, vec!["Short summary"]);
    }

    #[test]
    fn test_newline_forces_break() {
        let lines = wrap_text("first\nsecond", 10.0, FontStyle::Regular, 170.0);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_overlong_word_is_hard_broken() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, 10.0, FontStyle::Regular, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, FontStyle::Regular) <= 30.0);
        }
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10.0, FontStyle::Regular, 170.0), vec![String::new()]);
    }
}
