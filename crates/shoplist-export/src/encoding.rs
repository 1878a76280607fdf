//! Text encoding for the standard Type 1 fonts.
//!
//! Helvetica is referenced with `/WinAnsiEncoding`, so string operands are
//! single bytes. Latin-1 maps straight through; the handful of typographic
//! characters WinAnsi places in `0x80..=0x9F` are mapped explicitly and
//! everything else becomes `?`.

const FALLBACK: u8 = b'?';

/// Encode `text` as WinAnsi bytes.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(c: char) -> u8 {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(c)).unwrap_or(FALLBACK),
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(win_ansi("Leite 2L"), b"Leite 2L".to_vec());
    }

    #[test]
    fn test_latin1_accents() {
        assert_eq!(win_ansi("pão"), vec![b'p', 0xe3, b'o']);
        assert_eq!(win_ansi("laticínios")[4], 0xed);
    }

    #[test]
    fn test_windows_range() {
        assert_eq!(win_ansi("€…"), vec![0x80, 0x85]);
    }

    #[test]
    fn test_unmappable_falls_back() {
        assert_eq!(win_ansi("寿司"), b"??".to_vec());
        assert_eq!(win_ansi("a\tb"), b"a?b".to_vec());
    }
}
