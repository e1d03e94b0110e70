use smallvec::SmallVec;

use crate::registry::Registry;

/// Lexical piece of a message: literal text, or a well-formed `:name:`
/// shortcode with the colons removed. The scanner does not consult a
/// registry; unknown shortcodes are resolved (or passed through) by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Shortcode(&'a str),
}

pub type Segments<'a> = SmallVec<[Segment<'a>; 8]>;

pub(crate) fn is_shortname_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'+' | b'-')
}

/// Split a message into text and shortcode segments in one left-to-right
/// scan. A shortcode is a `:` pair enclosing one or more shortname bytes;
/// a `:` that never closes stays literal text.
pub fn parse(text: &str) -> Segments<'_> {
    let bytes = text.as_bytes();
    let mut segments = Segments::new();
    let mut start = 0;
    let mut open: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b':' {
            match open {
                Some(o) if i > o + 1 => {
                    if start < o {
                        segments.push(Segment::Text(&text[start..o]));
                    }
                    segments.push(Segment::Shortcode(&text[o + 1..i]));
                    start = i + 1;
                    open = None;
                }
                // "::" - the second colon may open a real shortcode
                _ => open = Some(i),
            }
        } else if !is_shortname_byte(b) {
            open = None;
        }
    }

    if start < text.len() {
        segments.push(Segment::Text(&text[start..]));
    }

    segments
}

/// Replace every known shortcode with its glyph. Unknown shortcodes are
/// left exactly as written.
pub fn replace(registry: &Registry, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in parse(text) {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Shortcode(name) => match registry.lookup(name) {
                Some(emoji) => out.push_str(&emoji.glyph),
                None => {
                    out.push(':');
                    out.push_str(name);
                    out.push(':');
                }
            },
        }
    }
    out
}

/// Remove every known shortcode and every known glyph from the message.
/// Unknown shortcodes stay in place.
pub fn strip(registry: &Registry, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in parse(text) {
        match segment {
            Segment::Text(t) => out.push_str(&registry.strip_glyphs(t)),
            Segment::Shortcode(name) => {
                if registry.lookup(name).is_none() {
                    out.push(':');
                    out.push_str(name);
                    out.push(':');
                }
            }
        }
    }
    out
}

/// True when the message contains at least one known emoji and nothing
/// else but whitespace.
pub fn is_emoji_only(registry: &Registry, text: &str) -> bool {
    let mut seen = false;
    for segment in parse(text) {
        match segment {
            Segment::Shortcode(name) => {
                if registry.lookup(name).is_none() {
                    return false;
                }
                seen = true;
            }
            Segment::Text(t) => {
                for token in t.split_whitespace() {
                    if registry.lookup_glyph(token).is_none() {
                        return false;
                    }
                    seen = true;
                }
            }
        }
    }
    seen
}
