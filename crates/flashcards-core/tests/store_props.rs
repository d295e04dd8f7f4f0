// Rust guideline compliant 2026-10-19

//! Property-based tests for the card store.
//!
//! These tests validate insertion order, duplicate rejection and the
//! export/import round-trip across generated card sets.

use flashcards_core::{Card, CardStore, Dialogue, Hardest, ImportOutcome, ScriptedPrompter, Transcript};
use proptest::prelude::*;
use std::collections::HashSet;
use tempfile::TempDir;

/// Generates cards with distinct terms and distinct definitions.
///
/// Terms and definitions use disjoint alphabets and never contain the
/// `", "` separator.
fn arb_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(
        (
            prop::string::string_regex("[a-m]{1,12}").unwrap(),
            prop::string::string_regex("[n-z ]{0,8}[n-z]").unwrap(),
            0u32..50,
        ),
        0..20,
    )
    .prop_map(|raw| {
        let mut terms = HashSet::new();
        let mut definitions = HashSet::new();
        raw.into_iter()
            .filter(|(term, definition, _)| {
                terms.insert(term.clone()) && definitions.insert(definition.clone())
            })
            .map(|(term, definition, errors)| Card::with_errors(term, definition, errors))
            .collect()
    })
}

fn store_from(cards: &[Card]) -> CardStore {
    let mut store = CardStore::new();
    for card in cards {
        store.insert(card.clone()).expect("distinct cards insert");
    }
    store
}

proptest! {
    #[test]
    fn prop_insert_preserves_cards_in_order(cards in arb_cards()) {
        let store = store_from(&cards);
        prop_assert_eq!(store.cards(), cards);
    }

    #[test]
    fn prop_duplicate_term_never_changes_store(cards in arb_cards(), definition in "[0-9]{1,5}") {
        prop_assume!(!cards.is_empty());
        let mut store = store_from(&cards);
        let target = &cards[cards.len() / 2];

        let result = store.insert(Card::new(target.term.clone(), definition));
        prop_assert!(result.is_err());
        prop_assert_eq!(store.cards(), cards);
    }

    #[test]
    fn prop_duplicate_definition_rejected(cards in arb_cards(), term in "[0-9]{1,5}") {
        prop_assume!(!cards.is_empty());
        let mut store = store_from(&cards);
        let target = &cards[0];

        let result = store.insert(Card::new(term.clone(), target.definition.clone()));
        prop_assert!(result.is_err());
        prop_assert!(!store.check_term(&term));
    }

    #[test]
    fn prop_reverse_map_is_injective(cards in arb_cards()) {
        let store = store_from(&cards);
        let reverse = store.reverse_map();
        prop_assert_eq!(reverse.len(), cards.len());
        for card in &cards {
            prop_assert_eq!(reverse.get(&card.definition), Some(&card.term));
        }
    }

    #[test]
    fn prop_export_import_round_trip(cards in arb_cards()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.txt");
        let original = store_from(&cards);
        prop_assert_eq!(original.export(&path).unwrap(), cards.len());

        let mut restored = CardStore::new();
        let mut prompter = ScriptedPrompter::default();
        let mut transcript = Transcript::new();
        let mut dialogue = Dialogue::new(&mut prompter, &mut transcript);
        let outcome = restored.import(&path, &mut dialogue).unwrap();

        prop_assert_eq!(outcome, ImportOutcome::Loaded(cards.len()));
        prop_assert_eq!(restored.cards(), cards);
    }

    #[test]
    fn prop_reset_zeroes_every_count(cards in arb_cards()) {
        let mut store = store_from(&cards);
        store.reset_stats();
        prop_assert_eq!(store.hardest(), Hardest::NoErrors);
        let terms: Vec<String> = store.cards().into_iter().map(|c| c.term).collect();
        let expected: Vec<String> = cards.into_iter().map(|c| c.term).collect();
        prop_assert_eq!(terms, expected);
    }

    #[test]
    fn prop_hardest_matches_maximum(cards in arb_cards()) {
        let store = store_from(&cards);
        let max = cards.iter().map(|c| c.errors).max().unwrap_or(0);
        let tied: Vec<String> = cards
            .iter()
            .filter(|c| c.errors == max)
            .map(|c| c.term.clone())
            .collect();

        match store.hardest() {
            Hardest::NoErrors => prop_assert_eq!(max, 0),
            Hardest::Single { term, errors } => {
                prop_assert_eq!(errors, max);
                prop_assert_eq!(vec![term], tied);
            }
            Hardest::Tied(terms) => {
                prop_assert!(terms.len() > 1);
                prop_assert_eq!(terms, tied);
            }
        }
    }
}
