//! String pages: banks of text addressed through pointer tables.
//!
//! A page is a bank-sized region holding 0xFF-terminated messages. Its
//! pointer table lists 16-bit addresses as the CPU sees them with the bank
//! switched into 0x4000..0x8000.

use serde::Serialize;

use lastbible_core::util::{BANK_SIZE, u16_le};
use lastbible_core::{Layout, RomError, RomImage, StringPageGeometry};

use crate::table::SENTINEL;
use crate::text::{Text, TextDecoder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringPage {
    pub name: String,
    pub strings: Vec<Text>,
}

/// The message a pointer refers to, up to but not including its
/// terminator. A pointer that falls outside the page yields an empty run.
pub fn resolve_pointer(page: &[u8], pointer: u16) -> &[u8] {
    let start = u64::from(pointer)
        .checked_sub(BANK_SIZE)
        .and_then(|rel| usize::try_from(rel).ok())
        .filter(|&rel| rel < page.len());
    let Some(start) = start else {
        log::debug!("string pointer {:#06x} is outside its page", pointer);
        return &[];
    };
    let rest = &page[start..];
    let end = rest
        .iter()
        .position(|&b| b == SENTINEL)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Decode every message of `page` addressed by `pointers` (raw LE bytes).
pub fn decode_page(page: &[u8], pointers: &[u8], decoder: &TextDecoder) -> Vec<Text> {
    pointers
        .chunks_exact(2)
        .map(|ptr| decoder.decode(resolve_pointer(page, u16_le(ptr, 0))))
        .collect()
}

pub fn read_string_page(
    rom: &mut RomImage,
    geometry: &StringPageGeometry,
    decoder: &TextDecoder,
) -> Result<StringPage, RomError> {
    log::debug!(
        "reading string page {:?}: {} pointers at {:#x}",
        geometry.name,
        geometry.pointer_count,
        geometry.pointer_table_offset
    );
    let page = rom.read(geometry.page_offset, geometry.page_size)?;
    let pointers = rom.read(geometry.pointer_table_offset, 2 * geometry.pointer_count)?;
    Ok(StringPage {
        name: geometry.name.clone(),
        strings: decode_page(&page, &pointers, decoder),
    })
}

/// Decode every string page of the layout, or `None` when no page is known.
pub fn gather_string_pages(
    rom: &mut RomImage,
    layout: &Layout,
    decoder: &TextDecoder,
) -> Result<Option<Vec<StringPage>>, RomError> {
    let Some(pages) = layout.string_pages() else {
        return Ok(None);
    };
    pages
        .iter()
        .map(|geometry| read_string_page(rom, geometry, decoder))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextToken;
    use lastbible_core::{Language, Revision};
    use std::io::Cursor;

    #[test]
    fn pointer_resolves_to_terminated_run() {
        let page = [0x0A, 0x0B, 0xFF, 0x0C, 0x0D];
        assert_eq!(resolve_pointer(&page, 0x4000), &[0x0A, 0x0B]);
        assert_eq!(resolve_pointer(&page, 0x4002), &[] as &[u8]);
        // unterminated run stops at the end of the page
        assert_eq!(resolve_pointer(&page, 0x4003), &[0x0C, 0x0D]);
    }

    #[test]
    fn pointer_outside_page_is_empty() {
        let page = [0x0A, 0xFF];
        assert!(resolve_pointer(&page, 0x4002).is_empty());
        assert!(resolve_pointer(&page, 0x3FFF).is_empty());
        assert!(resolve_pointer(&page, 0xFFFF).is_empty());
    }

    #[test]
    fn decodes_page_through_pointer_table() {
        let decoder = TextDecoder::new(Language::English);
        // "AB" <newline> "C", then "D"
        let page = [0x0A, 0x0B, 0xFE, 0x0C, 0xFF, 0x0D, 0xFF];
        let pointers = [0x00, 0x40, 0x05, 0x40, 0x00, 0x80];
        let strings = decode_page(&page, &pointers, &decoder);

        assert_eq!(strings.len(), 3);
        assert_eq!(
            strings[0].tokens(),
            &[
                TextToken::PlainText("AB".into()),
                TextToken::Newline,
                TextToken::PlainText("C".into()),
            ]
        );
        assert_eq!(strings[1].as_plain(), Some("D"));
        assert!(strings[2].tokens().is_empty());
    }

    #[test]
    fn gathers_pages_from_layout() {
        let mut data = vec![0u8; 0xC000];
        data[0x134..0x144].copy_from_slice(Revision::GbcEn.fingerprint());
        data[0x8000..0x8003].copy_from_slice(&[0x0A, 0x0B, 0xFF]);
        data[0x7000..0x7004].copy_from_slice(&[0x00, 0x40, 0x01, 0x40]);
        let mut rom = RomImage::from_reader(Cursor::new(data)).unwrap();
        let layout = Layout::new(Revision::GbcEn).with_string_pages(vec![StringPageGeometry {
            name: "dialogue".into(),
            page_offset: 0x8000,
            page_size: 0x4000,
            pointer_table_offset: 0x7000,
            pointer_count: 2,
        }]);
        let decoder = TextDecoder::new(Language::English);

        let pages = gather_string_pages(&mut rom, &layout, &decoder)
            .unwrap()
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "dialogue");
        assert_eq!(pages[0].strings[0].as_plain(), Some("AB"));
        assert_eq!(pages[0].strings[1].as_plain(), Some("B"));
    }

    #[test]
    fn layout_without_pages_is_none() {
        let mut data = vec![0u8; 0x8000];
        data[0x134..0x144].copy_from_slice(Revision::GbcEn.fingerprint());
        let mut rom = RomImage::from_reader(Cursor::new(data)).unwrap();
        let decoder = TextDecoder::new(Language::English);
        let layout = Layout::for_revision(Revision::GbcEn);
        assert!(
            gather_string_pages(&mut rom, &layout, &decoder)
                .unwrap()
                .is_none()
        );
    }
}
