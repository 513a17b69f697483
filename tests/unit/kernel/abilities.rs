use super::*;

#[test]
fn ids_and_keywords_resolve_to_the_same_kind() {
    for ability in ABILITIES {
        assert_eq!(AbilityKind::from_name(ability.name()), Some(ability.kind));
        assert_eq!(AbilityKind::from_name(ability.trigger), Some(ability.kind));
    }
    assert_eq!(AbilityKind::from_name("fireball"), None);
    assert_eq!(AbilityKind::from_name(""), None);
}

#[test]
fn scan_finds_keyword_char_range() {
    let found = scan("x = 1\nhugio\n", &ABILITIES).unwrap();
    assert_eq!(found.ability.kind, AbilityKind::Grow);
    assert_eq!(found.range, 6..11);
}

#[test]
fn scan_counts_chars_not_bytes() {
    let found = scan("é→ smallio", &ABILITIES).unwrap();
    assert_eq!(found.ability.kind, AbilityKind::Shrink);
    assert_eq!(found.range, 3..10);
}

#[test]
fn scan_prefers_catalog_order_over_position() {
    let found = scan("hugio deletio", &ABILITIES).unwrap();
    assert_eq!(found.ability.kind, AbilityKind::DeleteType);
    assert_eq!(found.range, 6..13);
}

#[test]
fn scan_uses_first_occurrence() {
    let found = scan("lightio lightio", &ABILITIES).unwrap();
    assert_eq!(found.range, 0..7);
}

#[test]
fn scan_without_keywords_is_none() {
    assert!(scan("def syntax(): pass", &ABILITIES).is_none());
    assert!(scan("", &ABILITIES).is_none());
    assert!(scan("deletio", &[]).is_none());
}
