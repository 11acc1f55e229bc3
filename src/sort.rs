//! Card ordering rules.
//!
//! Two sort keys, two directions, always a stable sort over the extracted
//! cards. The asymmetry between the modes is deliberate and matches what the
//! gallery's existing pages were sorted with:
//!
//! - **Name, descending** reverses the whole ascending result. Cards with
//!   equal titles therefore come out in *reverse* document order.
//! - **Date, descending** reverses the comparator instead. Cards with equal
//!   dates keep their document order.
//!
//! Dateless cards pin to one end of a date sort: they take the minimum
//! possible date when ascending and the maximum when descending, so they
//! always surface at the start (asc) or the end (desc) of the gallery.

use crate::markup::Card;
use chrono::NaiveDate;
use clap::ValueEnum;

/// Which card field drives the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Case-insensitive card title.
    Name,
    /// Date interpreted from the card subtitle.
    Date,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Ascending (A→Z, oldest first).
    Asc,
    /// Descending (Z→A, newest first).
    Desc,
}

/// Reorder `cards` in place. Never fails; the card set is unchanged.
pub fn sort_cards(cards: &mut [Card], by: SortKey, order: SortOrder) {
    match by {
        SortKey::Name => {
            cards.sort_by_cached_key(|c| c.title.to_lowercase());
            if order == SortOrder::Desc {
                cards.reverse();
            }
        }
        SortKey::Date => {
            let fallback = match order {
                SortOrder::Asc => NaiveDate::MIN,
                SortOrder::Desc => NaiveDate::MAX,
            };
            cards.sort_by(|a, b| {
                let ord = a.date.unwrap_or(fallback).cmp(&b.date.unwrap_or(fallback));
                match order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, sub: &str) -> Card {
        Card {
            prefix: "<!-- ▶▶ PHOTO CARD START -->\n".to_string(),
            body: format!(
                "<article class=\"card\"><h3 class=\"title\">{title}</h3><p class=\"sub\">{sub}</p></article>"
            ),
            suffix: "\n<!-- ◀◀ PHOTO CARD END -->".to_string(),
            title: title.to_string(),
            sub: sub.to_string(),
            date: crate::date::parse_card_date(sub),
        }
    }

    fn titles(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn name_asc_is_case_insensitive() {
        let mut cards = vec![card("Zebra", ""), card("apple", ""), card("Mango", "")];
        sort_cards(&mut cards, SortKey::Name, SortOrder::Asc);
        assert_eq!(titles(&cards), ["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn name_desc_is_exact_reverse_of_asc() {
        let mut cards = vec![card("Zebra", ""), card("apple", ""), card("Mango", "")];
        sort_cards(&mut cards, SortKey::Name, SortOrder::Desc);
        assert_eq!(titles(&cards), ["Zebra", "Mango", "apple"]);
    }

    #[test]
    fn name_ties_keep_document_order_ascending() {
        let mut cards = vec![card("B", "first"), card("A", ""), card("B", "second")];
        sort_cards(&mut cards, SortKey::Name, SortOrder::Asc);
        assert_eq!(titles(&cards), ["A", "B", "B"]);
        assert_eq!(cards[1].sub, "first");
        assert_eq!(cards[2].sub, "second");
    }

    #[test]
    fn name_ties_reverse_document_order_descending() {
        // Descending reverses the ascending result wholesale, so the two "B"
        // cards come out in reverse document order.
        let mut cards = vec![card("B", "first"), card("A", ""), card("B", "second")];
        sort_cards(&mut cards, SortKey::Name, SortOrder::Desc);
        assert_eq!(titles(&cards), ["B", "B", "A"]);
        assert_eq!(cards[0].sub, "second");
        assert_eq!(cards[1].sub, "first");
    }

    #[test]
    fn name_missing_title_sorts_as_empty_string() {
        let mut cards = vec![card("Apple", ""), card("", "untitled")];
        sort_cards(&mut cards, SortKey::Name, SortOrder::Asc);
        assert_eq!(titles(&cards), ["", "Apple"]);
    }

    #[test]
    fn date_asc_orders_oldest_first() {
        let mut cards = vec![
            card("new", "2024-01-05"),
            card("old", "2023-06-01"),
            card("mid", "2023-12-31"),
        ];
        sort_cards(&mut cards, SortKey::Date, SortOrder::Asc);
        assert_eq!(titles(&cards), ["old", "mid", "new"]);
    }

    #[test]
    fn date_asc_puts_dateless_first() {
        let mut cards = vec![
            card("a", "2024-01-05"),
            card("b", "no date here"),
            card("c", "2023-06-01"),
        ];
        sort_cards(&mut cards, SortKey::Date, SortOrder::Asc);
        assert_eq!(titles(&cards), ["b", "c", "a"]);
    }

    #[test]
    fn date_desc_puts_dateless_last() {
        let mut cards = vec![
            card("a", "2024-01-05"),
            card("b", "no date here"),
            card("c", "2023-06-01"),
        ];
        sort_cards(&mut cards, SortKey::Date, SortOrder::Desc);
        assert_eq!(titles(&cards), ["a", "c", "b"]);
    }

    #[test]
    fn date_desc_ties_keep_document_order() {
        // Reversed comparator, still a stable sort: equal dates stay in
        // document order (unlike the name sort's reverse-wholesale rule).
        let mut cards = vec![
            card("first", "2024-01-05"),
            card("second", "2024-01-05"),
            card("older", "2023-06-01"),
        ];
        sort_cards(&mut cards, SortKey::Date, SortOrder::Desc);
        assert_eq!(titles(&cards), ["first", "second", "older"]);
    }

    #[test]
    fn sorting_preserves_card_set() {
        let mut cards = vec![card("b", "2024-01-05"), card("a", ""), card("c", "x")];
        let mut bodies: Vec<String> = cards.iter().map(|c| c.body.clone()).collect();
        sort_cards(&mut cards, SortKey::Date, SortOrder::Desc);
        let mut after: Vec<String> = cards.iter().map(|c| c.body.clone()).collect();
        bodies.sort();
        after.sort();
        assert_eq!(bodies, after);
    }
}
