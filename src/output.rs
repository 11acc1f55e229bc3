//! CLI output formatting.
//!
//! Display is information-centric: each card shows as a positional index plus
//! its title, with the interpreted date as an indented context line when the
//! sort is date-driven. Format functions are pure (return `Vec<String>`, no
//! I/O) so tests can assert on them; `print_*` wrappers write to stdout.
//!
//! ```text
//! Sorted 3 cards by date (asc)
//! 001 Harbour at Dusk
//!     Date: 2023-06-01
//! 002 Market Day
//!     Date: 2024-01-05
//! 003 Untitled Proof
//!     Date: none
//! ```

use crate::markup::Card;
use crate::sort::{SortKey, SortOrder};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the post-sort card listing.
pub fn format_sort_output(cards: &[Card], by: SortKey, order: SortOrder) -> Vec<String> {
    let key = match by {
        SortKey::Name => "name",
        SortKey::Date => "date",
    };
    let dir = match order {
        SortOrder::Asc => "asc",
        SortOrder::Desc => "desc",
    };
    let noun = if cards.len() == 1 { "card" } else { "cards" };
    let mut lines = vec![format!("Sorted {} {} by {} ({})", cards.len(), noun, key, dir)];
    for (i, card) in cards.iter().enumerate() {
        let title = if card.title.is_empty() {
            "(untitled)"
        } else {
            &card.title
        };
        lines.push(format!("{} {}", format_index(i + 1), title));
        if by == SortKey::Date {
            match card.date {
                Some(d) => lines.push(format!("    Date: {}", d.format("%Y-%m-%d"))),
                None => lines.push("    Date: none".to_string()),
            }
        }
    }
    lines
}

/// Print the post-sort card listing to stdout.
pub fn print_sort_output(cards: &[Card], by: SortKey, order: SortOrder) {
    for line in format_sort_output(cards, by, order) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, sub: &str) -> Card {
        Card {
            prefix: String::new(),
            body: String::new(),
            suffix: String::new(),
            title: title.to_string(),
            sub: sub.to_string(),
            date: crate::date::parse_card_date(sub),
        }
    }

    #[test]
    fn name_sort_lists_indexed_titles_only() {
        let cards = vec![card("Apple", ""), card("Zebra", "2024-01-05")];
        let lines = format_sort_output(&cards, SortKey::Name, SortOrder::Asc);
        assert_eq!(
            lines,
            ["Sorted 2 cards by name (asc)", "001 Apple", "002 Zebra"]
        );
    }

    #[test]
    fn date_sort_adds_date_context_lines() {
        let cards = vec![card("Apple", "2024-01-05"), card("Zebra", "no date")];
        let lines = format_sort_output(&cards, SortKey::Date, SortOrder::Desc);
        assert_eq!(
            lines,
            [
                "Sorted 2 cards by date (desc)",
                "001 Apple",
                "    Date: 2024-01-05",
                "002 Zebra",
                "    Date: none",
            ]
        );
    }

    #[test]
    fn untitled_cards_show_placeholder() {
        let cards = vec![card("", "")];
        let lines = format_sort_output(&cards, SortKey::Name, SortOrder::Asc);
        assert_eq!(lines, ["Sorted 1 card by name (asc)", "001 (untitled)"]);
    }
}
