//! Deterministic text normalization applied before any pattern testing.
//!
//! Collapses whitespace and rewrites the Unicode math symbols that show up
//! in textbook copy-paste (×, ÷, −, ², π, √, °) into the ASCII tokens the
//! recognizers and the expression parser expect.

/// Convert a superscript digit character to its numeric value.
fn superscript_to_digit(c: char) -> Option<u32> {
    match c {
        '⁰' => Some(0),
        '¹' => Some(1),
        '²' => Some(2),
        '³' => Some(3),
        '⁴' => Some(4),
        '⁵' => Some(5),
        '⁶' => Some(6),
        '⁷' => Some(7),
        '⁸' => Some(8),
        '⁹' => Some(9),
        _ => None,
    }
}

/// Normalize raw problem text.
///
/// The result is what recognizer patterns and extraction routines run
/// against; the raw text is kept separately on the [`crate::Problem`].
pub fn normalize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(d) = superscript_to_digit(c) {
            // Collapse a run of superscript digits into a single `^n`.
            let mut value = d;
            while let Some(&next) = chars.peek() {
                match superscript_to_digit(next) {
                    Some(d2) => {
                        value = value * 10 + d2;
                        chars.next();
                    }
                    None => break,
                }
            }
            out.push('^');
            out.push_str(&value.to_string());
            continue;
        }
        match c {
            '×' | '·' => out.push('*'),
            '÷' => out.push('/'),
            '−' | '–' | '—' => out.push('-'),
            'π' => out.push_str("pi"),
            '√' => out.push_str("sqrt"),
            '≤' => out.push_str("<="),
            '≥' => out.push_str(">="),
            '°' => out.push_str(" degrees"),
            _ => out.push(c),
        }
    }

    // Whitespace collapse, including whatever the substitutions introduced.
    let mut collapsed = String::with_capacity(out.len());
    let mut last_was_space = true;
    for c in out.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
                last_was_space = true;
            }
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }
    while collapsed.ends_with(' ') {
        collapsed.pop();
    }
    collapsed
}
