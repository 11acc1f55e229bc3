//! # gal-sort
//!
//! Reorders the photo cards inside a static HTML gallery page, sorting by
//! card title or by a date embedded in the card subtitle. Everything outside
//! the gallery grid — and every byte of every card — is preserved exactly;
//! only the order of cards within the grid changes. In-place runs write a
//! `.bak` copy of the original before touching the input.
//!
//! # Architecture: One Linear Pipeline
//!
//! There is no state between runs and no concurrency. A run is five pure-ish
//! stages, each a function the next one feeds:
//!
//! ```text
//! locate   document        →  GalleryRegion     (find the grid span)
//! extract  region interior →  Vec<Card>         (split out the cards)
//! sort     Vec<Card>       →  Vec<Card>         (reorder, stable)
//! rewrite  region + cards  →  new document      (splice back)
//! persist  new document    →  disk              (backup, then write)
//! ```
//!
//! The locate/extract/rewrite stages are pure functions over strings, so unit
//! tests exercise the whole transform without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`markup`] | The marker contract — region location, card extraction, entity decoding, region rewriting |
//! | [`date`] | Subtitle → optional calendar date, four formats in fixed priority order |
//! | [`sort`] | Stable ordering by title or date, with the dateless-card pinning rule |
//! | [`output`] | CLI output formatting — indexed card listing |
//! | [`persist`] | Backup-then-write persistence for in-place runs |
//!
//! # Design Decisions
//!
//! ## Fixed Markers Over a Real HTML Parser
//!
//! The gallery page is produced by an upstream generator that brackets every
//! card with literal `PHOTO CARD START`/`PHOTO CARD END` comments and fixed
//! class names. Those markers are the contract; this tool is a pure
//! downstream consumer and never generates them. Matching the markers with
//! anchored regexes is exact for this format and guarantees the one property
//! a tree parser would make hard: untouched input bytes come through
//! untouched. All marker knowledge is confined to [`markup`], so the matching
//! strategy could be swapped without touching the sort or persistence stages.
//!
//! ## Date Parse Failures Are Not Errors
//!
//! Subtitles are free text and often carry no date at all. The date
//! interpreter degrades to "no date" instead of failing, and the orderer pins
//! dateless cards to one end of the gallery (which end depends on direction).
//! Only two conditions abort a run, both before anything is written: no grid
//! region in the document, or a grid with zero delimited cards.

pub mod date;
pub mod markup;
pub mod output;
pub mod persist;
pub mod sort;
