//! In-game text decoding.
//!
//! Text is stored in a custom 8-bit encoding with in-band control codes.
//! [`TextDecoder`] turns a byte run into a sequence of [`TextToken`]s:
//! printable bytes accumulate into plain-text runs and every control code
//! ends the current run and emits its own token.

use serde::{Serialize, Serializer};
use unicode_normalization::UnicodeNormalization;

use lastbible_core::Language;

use crate::charset::{self, Charset};

/// End of a text field or message.
pub const END_OF_TEXT: u8 = 0xFF;
/// Line break.
pub const NEWLINE: u8 = 0xFE;
/// Insert a party member's name; the next byte is the member index.
pub const HERO_NAME: u8 = 0xFD;
/// Yes/No choice (Japanese releases only).
pub const YES_NO_PROMPT: u8 = 0xFB;
/// Wait for a button press.
pub const WAIT_FOR_BUTTON: u8 = 0xF3;
/// Scroll the text window up one line.
pub const SCROLL_UP: u8 = 0xF0;

/// One element of decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextToken {
    PlainText(String),
    EndOfText,
    Newline,
    ScrollUp,
    WaitForButton,
    YesNoPrompt,
    /// Hero name substitution. `None` when the stream ended before the index.
    HeroNameRef(Option<u8>),
    /// A byte with no printable mapping.
    UnknownControlCode(u8),
}

/// A decoded text field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text(pub Vec<TextToken>);

impl Text {
    pub fn plain(s: impl Into<String>) -> Self {
        Self(vec![TextToken::PlainText(s.into())])
    }

    pub fn tokens(&self) -> &[TextToken] {
        &self.0
    }

    /// The text as a bare string, if it is exactly one plain-text run.
    pub fn as_plain(&self) -> Option<&str> {
        match self.0.as_slice() {
            [TextToken::PlainText(s)] => Some(s),
            _ => None,
        }
    }

    /// Collapse into the form consumers expect: a bare string for a lone
    /// plain-text run, the token list otherwise.
    pub fn view(&self) -> TextView<'_> {
        match self.as_plain() {
            Some(s) => TextView::Plain(s),
            None => TextView::Tokens(&self.0),
        }
    }
}

/// Presentation form of a [`Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextView<'a> {
    Plain(&'a str),
    Tokens(&'a [TextToken]),
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

/// Decoder for one language's text encoding.
#[derive(Debug, Clone, Copy)]
pub struct TextDecoder {
    charset: &'static Charset,
    language: Language,
}

impl TextDecoder {
    pub fn new(language: Language) -> Self {
        let charset: &'static Charset = match language {
            Language::Japanese => &*charset::JAPANESE,
            Language::English => &*charset::ENGLISH,
        };
        Self { charset, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Decode a byte run into tokens.
    ///
    /// Decoding does not stop at [`END_OF_TEXT`]; every byte of `bytes` is
    /// consumed and a trailing run is flushed at the end.
    pub fn decode(&self, bytes: &[u8]) -> Text {
        let primary = self.language.is_primary();
        let mut run = Run::new(primary);
        let mut iter = bytes.iter().copied();

        while let Some(b) = iter.next() {
            let control = match b {
                END_OF_TEXT => Some(TextToken::EndOfText),
                NEWLINE => Some(TextToken::Newline),
                HERO_NAME => Some(TextToken::HeroNameRef(iter.next())),
                YES_NO_PROMPT if primary => Some(TextToken::YesNoPrompt),
                WAIT_FOR_BUTTON => Some(TextToken::WaitForButton),
                SCROLL_UP => Some(TextToken::ScrollUp),
                _ => None,
            };
            if let Some(token) = control {
                run.emit(token);
                continue;
            }

            match self.charset[b as usize] {
                Some(c) => run.push(b, c),
                None => run.emit(TextToken::UnknownControlCode(b)),
            }
        }

        Text(run.finish())
    }
}

/// Accumulates printable characters between control codes.
struct Run {
    primary: bool,
    text: String,
    last_was_kana: bool,
    tokens: Vec<TextToken>,
}

impl Run {
    fn new(primary: bool) -> Self {
        Self {
            primary,
            text: String::new(),
            last_was_kana: false,
            tokens: Vec::new(),
        }
    }

    fn push(&mut self, b: u8, c: char) {
        let c = if self.primary && self.last_was_kana {
            match c {
                charset::DAKUTEN => charset::COMBINING_DAKUTEN,
                charset::HANDAKUTEN => charset::COMBINING_HANDAKUTEN,
                other => other,
            }
        } else {
            c
        };
        self.text.push(c);
        self.last_was_kana = charset::is_kana(b);
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            let text = if self.primary {
                text.nfc().collect()
            } else {
                text
            };
            self.tokens.push(TextToken::PlainText(text));
        }
        self.last_was_kana = false;
    }

    fn emit(&mut self, token: TextToken) {
        self.flush();
        self.tokens.push(token);
    }

    fn finish(mut self) -> Vec<TextToken> {
        self.flush();
        self.tokens
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
