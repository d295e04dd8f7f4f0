// Rust guideline compliant 2026-10-19

//! Unit tests for the card store.
//!
//! These tests cover insertion, uniqueness rejection, removal, the
//! hardest-card query and statistics reset.

use flashcards_core::{Card, CardStore, Dialogue, Error, Hardest, Removal, ScriptedPrompter, Transcript};

/// Helper to build a store from (term, definition, errors) triples.
fn store_with(cards: &[(&str, &str, u32)]) -> CardStore {
    let mut store = CardStore::new();
    for (term, definition, errors) in cards {
        store
            .insert(Card::with_errors(*term, *definition, *errors))
            .expect("Failed to insert card");
    }
    store
}

#[test]
fn test_insert_preserves_order_and_counts() {
    let store = store_with(&[("cat", "gato", 0), ("dog", "perro", 2), ("owl", "buho", 1)]);

    let cards = store.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0], Card::new("cat", "gato"));
    assert_eq!(cards[1], Card::with_errors("dog", "perro", 2));
    assert_eq!(cards[2], Card::with_errors("owl", "buho", 1));
}

#[test]
fn test_duplicate_term_rejected_without_change() {
    let mut store = store_with(&[("cat", "gato", 3)]);

    let err = store.insert(Card::new("cat", "chat")).unwrap_err();
    assert!(matches!(err, Error::DuplicateTerm(ref term) if term == "cat"));
    assert_eq!(store.get("cat"), Some(Card::with_errors("cat", "gato", 3)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_duplicate_definition_rejected() {
    let mut store = store_with(&[("cat", "gato", 0)]);

    let err = store.insert(Card::new("kitty", "gato")).unwrap_err();
    assert!(matches!(err, Error::DuplicateDefinition(ref def) if def == "gato"));
    assert!(err.is_duplicate());
    assert!(!store.check_term("kitty"));
}

#[test]
fn test_check_term_and_definition() {
    let store = store_with(&[("cat", "gato", 0)]);

    assert!(store.check_term("cat"));
    assert!(!store.check_term("gato"));
    assert!(store.check_definition("gato"));
    assert!(!store.check_definition("cat"));
}

#[test]
fn test_remove_present_term() {
    let mut store = store_with(&[("cat", "gato", 4), ("dog", "perro", 0)]);

    let removal = store.remove("cat");
    assert_eq!(removal, Removal::Removed(Card::with_errors("cat", "gato", 4)));
    assert!(store.get("cat").is_none());
    assert!(!store.check_definition("gato"));
    assert_eq!(store.cards(), vec![Card::new("dog", "perro")]);
}

#[test]
fn test_remove_absent_term() {
    let mut store = store_with(&[("cat", "gato", 0)]);

    let removal = store.remove("owl");
    assert_eq!(removal, Removal::NotFound("owl".to_string()));
    assert_eq!(store.cards(), vec![Card::new("cat", "gato")]);
}

#[test]
fn test_remove_then_readd_goes_to_end() {
    let mut store = store_with(&[("cat", "gato", 0), ("dog", "perro", 0)]);
    store.remove("cat");
    store.insert(Card::new("cat", "gato")).expect("re-add");

    let terms: Vec<String> = store.cards().into_iter().map(|c| c.term).collect();
    assert_eq!(terms, vec!["dog", "cat"]);
}

#[test]
fn test_reverse_map_inverts_cards() {
    let store = store_with(&[("cat", "gato", 0), ("dog", "perro", 0)]);

    let reverse = store.reverse_map();
    assert_eq!(reverse.len(), 2);
    assert_eq!(reverse.get("gato").map(String::as_str), Some("cat"));
    assert_eq!(reverse.get("perro").map(String::as_str), Some("dog"));
}

#[test]
fn test_hardest_empty_store() {
    assert_eq!(CardStore::new().hardest(), Hardest::NoErrors);
}

#[test]
fn test_hardest_all_zero() {
    let store = store_with(&[("cat", "gato", 0), ("dog", "perro", 0)]);
    assert_eq!(store.hardest(), Hardest::NoErrors);
}

#[test]
fn test_hardest_single_maximum() {
    let store = store_with(&[("cat", "gato", 1), ("dog", "perro", 5), ("owl", "buho", 2)]);
    assert_eq!(
        store.hardest(),
        Hardest::Single {
            term: "dog".to_string(),
            errors: 5
        }
    );
}

#[test]
fn test_hardest_tie_lists_all_terms() {
    let store = store_with(&[("cat", "gato", 3), ("dog", "perro", 1), ("owl", "buho", 3)]);
    assert_eq!(
        store.hardest(),
        Hardest::Tied(vec!["cat".to_string(), "owl".to_string()])
    );
}

#[test]
fn test_reset_stats_clears_counts_only() {
    let mut store = store_with(&[("cat", "gato", 3), ("dog", "perro", 1)]);

    assert_eq!(store.reset_stats(), 2);
    assert_eq!(
        store.cards(),
        vec![Card::new("cat", "gato"), Card::new("dog", "perro")]
    );

    assert_eq!(store.reset_stats(), 2);
    assert_eq!(store.hardest(), Hardest::NoErrors);
}

#[test]
fn test_add_cards_asks_for_count() {
    let mut store = CardStore::new();
    let mut prompter = ScriptedPrompter::new(["2", "cat", "gato", "dog", "perro"]);
    let mut transcript = Transcript::new();
    let mut dialogue = Dialogue::new(&mut prompter, &mut transcript);

    let added = store.add_cards(None, &mut dialogue).expect("add");

    assert_eq!(added.len(), 2);
    assert_eq!(
        store.cards(),
        vec![Card::new("cat", "gato"), Card::new("dog", "perro")]
    );
    assert_eq!(
        prompter.prompts(),
        &[
            "Input the number of cards:",
            "The term for card #1:",
            "The definition for card #1:",
            "The term for card #2:",
            "The definition for card #2:",
        ]
    );
    assert_eq!(
        prompter.notices(),
        &[
            "The pair (\"cat\":\"gato\") has been added.",
            "The pair (\"dog\":\"perro\") has been added.",
        ]
    );
}

#[test]
fn test_add_cards_reasks_duplicates() {
    let mut store = store_with(&[("cat", "gato", 0)]);
    let mut prompter = ScriptedPrompter::new(["cat", "dog", "gato", "perro"]);
    let mut transcript = Transcript::new();
    let mut dialogue = Dialogue::new(&mut prompter, &mut transcript);

    store.add_cards(Some(1), &mut dialogue).expect("add");

    assert_eq!(store.get("dog"), Some(Card::new("dog", "perro")));
    assert_eq!(
        prompter.prompts(),
        &[
            "The term for card #1:",
            "The term \"cat\" already exists. Try again:",
            "The definition for card #1:",
            "The definition \"gato\" already exists. Try again:",
        ]
    );
    assert_eq!(
        transcript.lines(),
        &[
            "The term for card #1:",
            "> cat",
            "The term \"cat\" already exists. Try again:",
            "> dog",
            "The definition for card #1:",
            "> gato",
            "The definition \"gato\" already exists. Try again:",
            "> perro",
            "The pair (\"dog\":\"perro\") has been added.",
        ]
    );
}

#[test]
fn test_add_cards_invalid_count() {
    let mut store = CardStore::new();
    let mut prompter = ScriptedPrompter::new(["two"]);
    let mut transcript = Transcript::new();
    let mut dialogue = Dialogue::new(&mut prompter, &mut transcript);

    let err = store.add_cards(None, &mut dialogue).unwrap_err();
    assert!(matches!(err, Error::InvalidNumber(_)));
    assert!(store.is_empty());
}

#[test]
fn test_add_card_keeps_supplied_error_count() {
    let mut store = CardStore::new();
    let mut prompter = ScriptedPrompter::default();
    let mut transcript = Transcript::new();
    let mut dialogue = Dialogue::new(&mut prompter, &mut transcript);

    let card = store
        .add_card(Card::with_errors("cat", "gato", 7), &mut dialogue)
        .expect("add");

    assert_eq!(card.errors, 7);
    assert_eq!(store.get("cat").map(|c| c.errors), Some(7));
}
