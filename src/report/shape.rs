//! Arabic text shaping for renderers that draw glyphs left-to-right.
//!
//! PDF content streams have no bidi engine, so logical-order Arabic must be
//! converted to presentation forms (contextual letter shapes, lam-alef
//! ligatures) and then reordered into visual order. Spreadsheet readers do
//! their own reordering, but the matrix is shared, so shaping happens once
//! at formatting time.

use unicode_bidi::BidiInfo;

const LAM: char = '\u{0644}';

/// Shape a string for visual-order rendering.
///
/// Pure-LTR input is returned unchanged so Latin text and numbers are never
/// corrupted. Characters without a presentation form (or outside the Arabic
/// block entirely) pass through as-is.
pub fn shape(text: &str) -> String {
    if !has_rtl(text) {
        return text.to_string();
    }

    let reshaped = reshape_arabic(text);

    let bidi = BidiInfo::new(&reshaped, None);
    let mut out = String::with_capacity(reshaped.len());
    for para in &bidi.paragraphs {
        out.push_str(&bidi.reorder_line(para, para.range.clone()));
    }
    out
}

/// True if the string contains at least one character from an RTL block
/// (Hebrew, Arabic, or the Arabic presentation forms).
pub fn has_rtl(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{0590}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}')
    })
}

/// Contextual forms of one Arabic letter: (isolated, final, initial, medial).
/// Right-joining letters have no initial/medial form; hamza joins nothing.
type Forms = (char, Option<char>, Option<char>, Option<char>);

fn reshape_arabic(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    // Whether the previously emitted letter joins forward (dual-joining).
    let mut prev_dual = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // Harakat are transparent for joining purposes.
        if is_transparent(c) {
            out.push(c);
            i += 1;
            continue;
        }

        let Some(f) = forms(c) else {
            out.push(c);
            prev_dual = false;
            i += 1;
            continue;
        };

        // Lam + alef collapses into a single ligature glyph.
        if c == LAM
            && i + 1 < chars.len()
            && let Some((iso, fin)) = lam_alef(chars[i + 1])
        {
            out.push(if prev_dual { fin } else { iso });
            prev_dual = false;
            i += 2;
            continue;
        }

        let next = chars[i + 1..].iter().copied().find(|&n| !is_transparent(n));
        let linked_after = next
            .and_then(forms)
            .and_then(|(_, fin, _, _)| fin)
            .is_some();

        let (iso, fin, init, med) = f;
        let shaped = match (prev_dual, linked_after) {
            (true, true) => med.or(fin).unwrap_or(iso),
            (true, false) => fin.unwrap_or(iso),
            (false, true) => init.unwrap_or(iso),
            (false, false) => iso,
        };

        out.push(shaped);
        prev_dual = init.is_some() || med.is_some();
        i += 1;
    }

    out
}

fn is_transparent(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

fn lam_alef(alef: char) -> Option<(char, char)> {
    match alef {
        '\u{0622}' => Some(('\u{FEF5}', '\u{FEF6}')),
        '\u{0623}' => Some(('\u{FEF7}', '\u{FEF8}')),
        '\u{0625}' => Some(('\u{FEF9}', '\u{FEFA}')),
        '\u{0627}' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Arabic Presentation Forms-B mapping for the basic alphabet.
#[rustfmt::skip]
fn forms(c: char) -> Option<Forms> {
    let f: Forms = match c {
        '\u{0621}' => ('\u{FE80}', None, None, None),
        '\u{0622}' => ('\u{FE81}', Some('\u{FE82}'), None, None),
        '\u{0623}' => ('\u{FE83}', Some('\u{FE84}'), None, None),
        '\u{0624}' => ('\u{FE85}', Some('\u{FE86}'), None, None),
        '\u{0625}' => ('\u{FE87}', Some('\u{FE88}'), None, None),
        '\u{0626}' => ('\u{FE89}', Some('\u{FE8A}'), Some('\u{FE8B}'), Some('\u{FE8C}')),
        '\u{0627}' => ('\u{FE8D}', Some('\u{FE8E}'), None, None),
        '\u{0628}' => ('\u{FE8F}', Some('\u{FE90}'), Some('\u{FE91}'), Some('\u{FE92}')),
        '\u{0629}' => ('\u{FE93}', Some('\u{FE94}'), None, None),
        '\u{062A}' => ('\u{FE95}', Some('\u{FE96}'), Some('\u{FE97}'), Some('\u{FE98}')),
        '\u{062B}' => ('\u{FE99}', Some('\u{FE9A}'), Some('\u{FE9B}'), Some('\u{FE9C}')),
        '\u{062C}' => ('\u{FE9D}', Some('\u{FE9E}'), Some('\u{FE9F}'), Some('\u{FEA0}')),
        '\u{062D}' => ('\u{FEA1}', Some('\u{FEA2}'), Some('\u{FEA3}'), Some('\u{FEA4}')),
        '\u{062E}' => ('\u{FEA5}', Some('\u{FEA6}'), Some('\u{FEA7}'), Some('\u{FEA8}')),
        '\u{062F}' => ('\u{FEA9}', Some('\u{FEAA}'), None, None),
        '\u{0630}' => ('\u{FEAB}', Some('\u{FEAC}'), None, None),
        '\u{0631}' => ('\u{FEAD}', Some('\u{FEAE}'), None, None),
        '\u{0632}' => ('\u{FEAF}', Some('\u{FEB0}'), None, None),
        '\u{0633}' => ('\u{FEB1}', Some('\u{FEB2}'), Some('\u{FEB3}'), Some('\u{FEB4}')),
        '\u{0634}' => ('\u{FEB5}', Some('\u{FEB6}'), Some('\u{FEB7}'), Some('\u{FEB8}')),
        '\u{0635}' => ('\u{FEB9}', Some('\u{FEBA}'), Some('\u{FEBB}'), Some('\u{FEBC}')),
        '\u{0636}' => ('\u{FEBD}', Some('\u{FEBE}'), Some('\u{FEBF}'), Some('\u{FEC0}')),
        '\u{0637}' => ('\u{FEC1}', Some('\u{FEC2}'), Some('\u{FEC3}'), Some('\u{FEC4}')),
        '\u{0638}' => ('\u{FEC5}', Some('\u{FEC6}'), Some('\u{FEC7}'), Some('\u{FEC8}')),
        '\u{0639}' => ('\u{FEC9}', Some('\u{FECA}'), Some('\u{FECB}'), Some('\u{FECC}')),
        '\u{063A}' => ('\u{FECD}', Some('\u{FECE}'), Some('\u{FECF}'), Some('\u{FED0}')),
        '\u{0641}' => ('\u{FED1}', Some('\u{FED2}'), Some('\u{FED3}'), Some('\u{FED4}')),
        '\u{0642}' => ('\u{FED5}', Some('\u{FED6}'), Some('\u{FED7}'), Some('\u{FED8}')),
        '\u{0643}' => ('\u{FED9}', Some('\u{FEDA}'), Some('\u{FEDB}'), Some('\u{FEDC}')),
        '\u{0644}' => ('\u{FEDD}', Some('\u{FEDE}'), Some('\u{FEDF}'), Some('\u{FEE0}')),
        '\u{0645}' => ('\u{FEE1}', Some('\u{FEE2}'), Some('\u{FEE3}'), Some('\u{FEE4}')),
        '\u{0646}' => ('\u{FEE5}', Some('\u{FEE6}'), Some('\u{FEE7}'), Some('\u{FEE8}')),
        '\u{0647}' => ('\u{FEE9}', Some('\u{FEEA}'), Some('\u{FEEB}'), Some('\u{FEEC}')),
        '\u{0648}' => ('\u{FEED}', Some('\u{FEEE}'), None, None),
        '\u{0649}' => ('\u{FEEF}', Some('\u{FEF0}'), None, None),
        '\u{064A}' => ('\u{FEF1}', Some('\u{FEF2}'), Some('\u{FEF3}'), Some('\u{FEF4}')),
        _ => return None,
    };
    Some(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_identity() {
        assert_eq!(shape("Hello World 123"), "Hello World 123");
        assert_eq!(shape(""), "");
        assert_eq!(shape("2024-01-05"), "2024-01-05");
    }

    #[test]
    fn detects_rtl_characters() {
        assert!(!has_rtl("plain ascii"));
        assert!(has_rtl("\u{0645}"));
        assert!(has_rtl("mixed \u{05D0} text"));
        assert!(has_rtl("\u{FEE1}"));
    }

    #[test]
    fn shapes_and_reorders_pure_arabic() {
        // محمد: initial mim, medial hah, medial mim, final dal, reversed
        // into visual order.
        let shaped = shape("\u{0645}\u{062D}\u{0645}\u{062F}");
        assert_eq!(shaped, "\u{FEAA}\u{FEE4}\u{FEA4}\u{FEE3}");
    }

    #[test]
    fn lam_alef_ligature() {
        // لا alone is the isolated ligature.
        assert_eq!(shape("\u{0644}\u{0627}"), "\u{FEFB}");
        // سلام: initial sin, final lam-alef ligature, isolated mim.
        let shaped = shape("\u{0633}\u{0644}\u{0627}\u{0645}");
        assert_eq!(shaped, "\u{FEE1}\u{FEFC}\u{FEB3}");
    }

    #[test]
    fn mixed_direction_keeps_latin_in_place() {
        let shaped = shape("ABC \u{0633}\u{0644}\u{0627}\u{0645}");
        assert_eq!(shaped, "ABC \u{FEE1}\u{FEFC}\u{FEB3}");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        // Arabic-Indic digits and punctuation have no contextual form.
        let shaped = shape("\u{0645}\u{060C}\u{0661}");
        assert!(shaped.contains('\u{060C}'));
        assert!(shaped.contains('\u{0661}'));
    }

    #[test]
    fn right_joining_letter_breaks_connection() {
        // دار: dal never joins forward, so alef stays isolated-ish (final
        // only when preceded by a dual-joining letter).
        let shaped = shape("\u{062F}\u{0627}\u{0631}");
        // Visual order: ra, alef, dal, all unconnected isolated forms.
        assert_eq!(shaped, "\u{FEAD}\u{FE8D}\u{FEA9}");
    }
}
