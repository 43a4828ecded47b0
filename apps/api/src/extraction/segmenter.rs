//! About-Blob Segmenter — splits a raw "about" paragraph into an intro,
//! bullet-style highlights, and a closing statement.
//!
//! Two strategies, chosen by whether the text contains a bullet glyph.
//! No input ever errors: empty text yields empty segments, and the
//! no-bullets path falls back to "whole text as intro" rather than
//! dropping content.

use serde::{Deserialize, Serialize};

/// Bullet glyphs treated as interchangeable highlight delimiters.
const BULLET_GLYPHS: [char; 2] = ['•', '·'];

/// A trailing bullet longer than this is reclassified as the closing statement.
const CLOSING_LEN_THRESHOLD: usize = 150;

/// Minimum sentence breaks (". ", "! ", "? ") for a trailing bullet to read
/// as prose rather than a bullet.
const CLOSING_SENTENCE_BREAKS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutSegments {
    pub intro: String,
    pub highlights: Vec<String>,
    pub closing: String,
}

/// Segments an about-blob into intro / highlights / closing.
pub fn segment(about_text: &str) -> AboutSegments {
    if about_text.trim().is_empty() {
        return AboutSegments::default();
    }

    match about_text.find(BULLET_GLYPHS) {
        Some(first_bullet) => segment_bulleted(about_text, first_bullet),
        None => segment_paragraphs(about_text),
    }
}

/// No-bullets strategy: blank-line paragraphs. All but the last paragraph
/// form the intro; the last becomes the closing.
fn segment_paragraphs(text: &str) -> AboutSegments {
    let mut paragraphs: Vec<&str> = split_blank_lines(text);

    match paragraphs.len() {
        // Nothing survived trimming — keep the original text whole.
        0 => AboutSegments {
            intro: text.to_string(),
            ..Default::default()
        },
        1 => AboutSegments {
            intro: paragraphs[0].to_string(),
            ..Default::default()
        },
        _ => {
            let closing = paragraphs.pop().unwrap_or_default().to_string();
            AboutSegments {
                intro: paragraphs.join("\n\n"),
                highlights: Vec::new(),
                closing,
            }
        }
    }
}

/// Bullets strategy: intro before the first glyph, one highlight per glyph,
/// then possibly reclassify the last highlight as the closing.
fn segment_bulleted(text: &str, first_bullet: usize) -> AboutSegments {
    let intro = text[..first_bullet].trim().to_string();

    let mut highlights: Vec<String> = text[first_bullet..]
        .split(BULLET_GLYPHS)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect();

    let mut closing = String::new();
    if let Some(last) = highlights.last() {
        if reads_as_prose(last) {
            closing = highlights.pop().unwrap_or_default();
        }
    }

    AboutSegments {
        intro,
        highlights,
        closing,
    }
}

/// Heuristic for "this trailing chunk is a paragraph, not a bullet".
fn reads_as_prose(text: &str) -> bool {
    text.chars().count() > CLOSING_LEN_THRESHOLD
        || count_sentence_breaks(text) >= CLOSING_SENTENCE_BREAKS
}

fn count_sentence_breaks(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            count += 1;
        }
    }
    count
}

/// Splits on blank-line boundaries (two or more consecutive newlines),
/// trimming each paragraph and discarding empties.
fn split_blank_lines(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            // Look ahead past intervening spaces/tabs for a second newline.
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t' || bytes[j] == b'\r') {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'\n' {
                push_trimmed(&mut paragraphs, &text[start..i]);
                // Consume the whole run of blank lines.
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                start = j;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    push_trimmed(&mut paragraphs, &text[start..]);
    paragraphs
}

fn push_trimmed<'a>(paragraphs: &mut Vec<&'a str>, chunk: &'a str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed);
    }
}
