//! The marker contract: locating the gallery region and extracting cards.
//!
//! The gallery page is produced by an upstream generator we do not control.
//! Its structure is a fixed contract, not something we discover:
//!
//! ```text
//! <section class="gallery">
//!   <div class="grid">                      ← region opens here
//!     <!-- ▶▶ PHOTO CARD START -->          ← card prefix
//!     <article class="card">
//!       <h3 class="title">Dawn</h3>
//!       <p class="sub">2024-03-09 — Kyoto</p>
//!     </article>
//!     <!-- ◀◀ PHOTO CARD END -->            ← card suffix
//!     ...more cards...
//!   </div>                                  ← region closes here
//! </section>
//! ```
//!
//! The comment markers are an ad-hoc serialization format embedded in
//! free-form text. All knowledge of it lives in this module: the rest of the
//! crate sees a [`GalleryRegion`] (three byte spans over the document) and a
//! list of [`Card`] records with accessor fields. Swapping the matching
//! strategy (regex today, a token scanner or tree parser tomorrow) would not
//! touch the sort or persistence stages.
//!
//! Everything outside the region, and every card body inside it, is preserved
//! byte-for-byte. Only card order changes.

use crate::date;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("no grid section found")]
    RegionNotFound,
    #[error("no photo cards found between the markers")]
    NoCards,
}

/// `<div class="grid">` ... `</div></section>`, non-greedy interior.
static GRID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<div class="grid">)(.*?)(</div>\s*</section>)"#)
        .expect("invalid grid regex")
});

/// Comment-delimited card: marker, smallest complete `<article>` block, marker.
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<!-- ▶▶ PHOTO CARD START -->\s*)(<article.*?</article>)(\s*<!-- ◀◀ PHOTO CARD END -->)")
        .expect("invalid card regex")
});

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<h3\s+class="title">\s*([^<]+?)\s*</h3>"#).expect("invalid title regex")
});

static SUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<p\s+class="sub">\s*([^<]+?)\s*</p>"#).expect("invalid subtitle regex")
});

/// The gallery region located inside a document.
///
/// Holds byte offsets into the document it was located in: everything before
/// `interior_start` and from `interior_end` onward is untouchable context
/// (including the grid/section tags themselves); the span between them is the
/// card list subject to rewriting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryRegion {
    interior_start: usize,
    interior_end: usize,
}

/// One photo card, split into the three spans the rewriter needs.
///
/// `prefix`/`body`/`suffix` together are the card's exact original bytes.
/// `title` and `sub` are derived display fields (trimmed, entities decoded,
/// empty when the element is absent); `date` is interpreted from `sub` at
/// extraction time. Cards are never mutated after extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Start marker plus trailing whitespace.
    pub prefix: String,
    /// The full `<article>` block.
    pub body: String,
    /// Leading whitespace plus end marker.
    pub suffix: String,
    /// Text of `h3.title`, decoded and trimmed. Empty if absent.
    pub title: String,
    /// Text of `p.sub`, decoded and trimmed. Empty if absent.
    pub sub: String,
    /// Date interpreted from `sub`, if any.
    pub date: Option<NaiveDate>,
}

/// Locate the first gallery grid in `doc`.
///
/// Matches the opening `<div class="grid">` and the nearest subsequent
/// `</div></section>` closing sequence. Fails with
/// [`MarkupError::RegionNotFound`] when the document has no such region.
pub fn locate_grid(doc: &str) -> Result<GalleryRegion, MarkupError> {
    let caps = GRID_RE.captures(doc).ok_or(MarkupError::RegionNotFound)?;
    let interior = caps.get(2).expect("grid regex has 3 groups");
    Ok(GalleryRegion {
        interior_start: interior.start(),
        interior_end: interior.end(),
    })
}

impl GalleryRegion {
    /// The card-list span of `doc`, between the grid tags.
    ///
    /// `doc` must be the document this region was located in.
    pub fn interior<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.interior_start..self.interior_end]
    }

    /// Splice `cards` back into `doc` in their current order.
    ///
    /// The interior becomes the cards (each `prefix + body + suffix`) joined
    /// by single newlines, framed by one leading and one trailing newline.
    /// Bytes before and after the interior are carried over unchanged.
    pub fn rewrite(&self, doc: &str, cards: &[Card]) -> String {
        let joined = cards
            .iter()
            .map(|c| format!("{}{}{}", c.prefix, c.body, c.suffix))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n{}\n{}",
            &doc[..self.interior_start],
            joined,
            &doc[self.interior_end..]
        )
    }
}

/// Extract all cards from a region interior, in document order.
///
/// Matches are non-overlapping; document order becomes the stable pre-sort
/// order. A card missing its title or subtitle element gets an empty string
/// for that field, not an error. Fails with [`MarkupError::NoCards`] when the
/// interior contains no delimited cards at all.
pub fn extract_cards(interior: &str) -> Result<Vec<Card>, MarkupError> {
    let cards: Vec<Card> = CARD_RE
        .captures_iter(interior)
        .map(|caps| {
            let body = caps.get(2).expect("card regex has 3 groups").as_str();
            let title = inner_text(&TITLE_RE, body);
            let sub = inner_text(&SUB_RE, body);
            let date = date::parse_card_date(&sub);
            Card {
                prefix: caps[1].to_string(),
                body: body.to_string(),
                suffix: caps[3].to_string(),
                title,
                sub,
                date,
            }
        })
        .collect();
    if cards.is_empty() {
        return Err(MarkupError::NoCards);
    }
    Ok(cards)
}

/// First match of an inner element pattern, trimmed and entity-decoded.
fn inner_text(re: &Regex, body: &str) -> String {
    re.captures(body)
        .map(|caps| decode_entities(caps[1].trim()))
        .unwrap_or_default()
}

/// Decode HTML entities in extracted text.
///
/// Covers the named entities the gallery generator emits plus numeric
/// references (`&#233;`, `&#x2014;`). An `&` that does not introduce a
/// recognizable entity passes through literally.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = rest
            .find(';')
            .filter(|&end| end > 1)
            .and_then(|end| decode_entity(&rest[1..end]).map(|ch| (ch, end + 1)));
        match decoded {
            Some((ch, len)) => {
                out.push(ch);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}
