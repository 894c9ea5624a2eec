use std::cmp::Ordering;

use tabledom::{default_collator, CaseFirst, Collator, CYRILLIC, LATIN};

// ============================================================================
// Default collator (Latin + Cyrillic, uppercase first)
// ============================================================================

#[test]
fn test_uppercase_before_lowercase_of_same_letter() {
    let collator = default_collator();

    assert_eq!(collator.compare("Apple", "apple"), Ordering::Less);
    assert_eq!(collator.compare("apple", "Apple"), Ordering::Greater);
    assert_eq!(collator.compare("Москва", "москва"), Ordering::Less);
}

#[test]
fn test_pinned_textual_ordering() {
    let collator = default_collator();

    let mut values = vec!["banana", "Apple", "cherry"];
    values.sort_by(|a, b| collator.compare(a, b));
    assert_eq!(values, vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_case_is_secondary_to_letter_order() {
    let collator = default_collator();

    // 'b' ranks after 'a' regardless of case
    assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
    assert_eq!(collator.compare("Banana", "apple"), Ordering::Greater);
}

#[test]
fn test_cyrillic_letter_order() {
    let collator = default_collator();

    assert_eq!(collator.compare("арбуз", "Москва"), Ordering::Less);
    assert_eq!(collator.compare("Якорь", "арбуз"), Ordering::Greater);
}

#[test]
fn test_latin_ranks_before_cyrillic() {
    let collator = default_collator();

    assert_eq!(collator.compare("zebra", "арбуз"), Ordering::Less);
}

#[test]
fn test_shorter_prefix_sorts_first() {
    let collator = default_collator();

    assert_eq!(collator.compare("app", "apple"), Ordering::Less);
    assert_eq!(collator.compare("apple", "app"), Ordering::Greater);
}

#[test]
fn test_equal_strings() {
    let collator = default_collator();

    assert_eq!(collator.compare("same", "same"), Ordering::Equal);
    assert_eq!(collator.compare("", ""), Ordering::Equal);
}

#[test]
fn test_unregistered_characters_rank_after_letters() {
    let collator = default_collator();

    // Digits are not part of any registered alphabet
    assert_eq!(collator.compare("a", "1"), Ordering::Less);
    assert_eq!(collator.compare("1", "2"), Ordering::Less);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_case_first_lower() {
    let collator = Collator::new()
        .with_alphabet(LATIN)
        .case_first(CaseFirst::Lower);

    assert_eq!(collator.compare("apple", "Apple"), Ordering::Less);
}

#[test]
fn test_alphabet_order_is_configurable() {
    let collator = Collator::new().with_alphabet("BbAa");

    assert_eq!(collator.compare("banana", "apple"), Ordering::Less);
}

#[test]
fn test_alphabet_registration_order_decides_script_rank() {
    let collator = Collator::new().with_alphabet(CYRILLIC).with_alphabet(LATIN);

    // Opposite of the default: Cyrillic now ranks first
    assert_eq!(collator.compare("арбуз", "zebra"), Ordering::Less);
}
