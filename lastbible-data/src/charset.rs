//! Character tables for the two text encodings.
//!
//! Each table has 256 slots, one per byte value. U+FFFD marks a slot that
//! has no printable mapping; such bytes decode to an unknown control code.

use std::sync::LazyLock;

/// Marker for an unmapped slot in the source tables.
const UNMAPPED: char = '\u{FFFD}';

/// Byte values `KANA_START..KANA_END` are plain kana that can take a
/// following dakuten or handakuten mark.
pub const KANA_START: u8 = 0x0A;
pub const KANA_END: u8 = 0x78;

/// Standalone voiced-sound mark and its combining form.
pub const DAKUTEN: char = '゛';
pub const COMBINING_DAKUTEN: char = '\u{3099}';

/// Standalone semi-voiced-sound mark and its combining form.
pub const HANDAKUTEN: char = '゜';
pub const COMBINING_HANDAKUTEN: char = '\u{309A}';

/// A 256-entry byte-to-character lookup.
pub type Charset = [Option<char>; 256];

const JAPANESE_ROWS: [&str; 8] = [
    "０１２３４５６７８９あいうえおかきくけこさしすせそたちつてとなに",
    "ぬねのはひふへほまみむめもやゆよらりるれろわをんぁぃぅぇぉっゃゅ",
    "ょアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマ",
    "ミムメモヤユヨラリルレロワヲンァィゥェォッャュョ゛゜HMP？！ー",
    "���������������\u{3000}がぎぐげござじずぜぞだぢづでどば",
    "びぶべぼぱぴぷぺぽヴガギグゲゴザジズゼゾダヂヅデドバビブベボパピ",
    "プペポ�����������������������������",
    "��������������������������������",
];

const ENGLISH_ROWS: [&str; 8] = [
    "0123456789ABCDEFGHIJKLMNOPQRSTUV",
    "WXYZ\"#$%&'*()+,-./:;<=>[?]?_{|}~",
    " abcdefghijklmnopqrstuvwxyz�����",
    "��������������������������HMP?! ",
    "��������������� ����������������",
    "��������������������������������",
    "��������������������������������",
    "��������������������������������",
];

fn build(rows: &[&str; 8]) -> Charset {
    let mut table = [None; 256];
    for (slot, c) in table.iter_mut().zip(rows.iter().flat_map(|row| row.chars())) {
        if c != UNMAPPED {
            *slot = Some(c);
        }
    }
    table
}

/// Character table of the Japanese releases.
pub static JAPANESE: LazyLock<Charset> = LazyLock::new(|| build(&JAPANESE_ROWS));

/// Character table of Revelations: The Demon Slayer.
pub static ENGLISH: LazyLock<Charset> = LazyLock::new(|| build(&ENGLISH_ROWS));

/// Whether `b` lies in the plain-kana range of the Japanese table.
pub fn is_kana(b: u8) -> bool {
    (KANA_START..KANA_END).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_has_thirty_two_slots() {
        for row in JAPANESE_ROWS.iter().chain(ENGLISH_ROWS.iter()) {
            assert_eq!(row.chars().count(), 32, "bad row {:?}", row);
        }
    }

    #[test]
    fn japanese_table_spot_checks() {
        assert_eq!(JAPANESE[0x00], Some('０'));
        assert_eq!(JAPANESE[0x0A], Some('あ'));
        assert_eq!(JAPANESE[0x0F], Some('か'));
        assert_eq!(JAPANESE[0x78], Some(DAKUTEN));
        assert_eq!(JAPANESE[0x79], Some(HANDAKUTEN));
        assert_eq!(JAPANESE[0x8F], Some('\u{3000}'));
        assert_eq!(JAPANESE[0x90], Some('が'));
        assert_eq!(JAPANESE[0x80], None);
        assert_eq!(JAPANESE[0xFF], None);
    }

    #[test]
    fn english_table_spot_checks() {
        assert_eq!(ENGLISH[0x0A], Some('A'));
        assert_eq!(ENGLISH[0x23], Some('Z'));
        assert_eq!(ENGLISH[0x24], Some('"'));
        assert_eq!(ENGLISH[0x40], Some(' '));
        assert_eq!(ENGLISH[0x41], Some('a'));
        assert_eq!(ENGLISH[0x7A], Some('H'));
        assert_eq!(ENGLISH[0x7F], Some(' '));
        assert_eq!(ENGLISH[0x8F], Some(' '));
        assert_eq!(ENGLISH[0x5B], None);
        assert_eq!(ENGLISH[0xF3], None);
    }

    #[test]
    fn kana_range_excludes_marks() {
        assert!(is_kana(0x0A));
        assert!(is_kana(0x77));
        assert!(!is_kana(0x78));
        assert!(!is_kana(0x09));
        assert!(!is_kana(0x90));
    }
}
