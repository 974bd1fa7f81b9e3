use bson::Bson;
use docdao_core::{
    query::{Predicate, UNSUPPORTED_OPERATOR, native_operator},
    update::{Update, to_field_updates},
};

// ── Operator tokens ──────────────────────────────────────────────

#[test]
fn known_tokens_translate_to_native_operators() {
    let table = [
        ("EQ", "=="),
        ("NE", "!="),
        ("LT", "<"),
        ("GT", ">"),
        ("LE", "<="),
        ("GE", ">="),
    ];

    for (token, native) in table {
        assert_eq!(native_operator(token), native);
        assert_eq!(native_operator(&token.to_lowercase()), native);
    }
}

#[test]
fn mixed_case_tokens_translate() {
    assert_eq!(native_operator("Eq"), "==");
    assert_eq!(native_operator("gE"), ">=");
    assert_eq!(native_operator("lT"), "<");
}

#[test]
fn unrecognized_tokens_become_the_sentinel() {
    for token in ["LIKE", "IN", "equals", "===", ""] {
        assert_eq!(native_operator(token), UNSUPPORTED_OPERATOR);
    }
}

// ── Predicates ───────────────────────────────────────────────────

#[test]
fn predicate_constructors_emit_canonical_tokens() {
    assert_eq!(Predicate::eq("a", 1).operator, "EQ");
    assert_eq!(Predicate::ne("a", 1).operator, "NE");
    assert_eq!(Predicate::lt("a", 1).operator, "LT");
    assert_eq!(Predicate::gt("a", 1).operator, "GT");
    assert_eq!(Predicate::le("a", 1).operator, "LE");
    assert_eq!(Predicate::ge("a", 1).operator, "GE");
}

#[test]
fn predicates_translate_into_native_filters() {
    let filter = Predicate::ge("score", 18).to_filter();

    assert_eq!(filter.path, "score");
    assert_eq!(filter.op, ">=");
    assert_eq!(filter.value, Bson::Int32(18));
}

#[test]
fn sentinel_travels_through_filter_translation() {
    let filter = Predicate::new("name", "FUZZY", "x").to_filter();

    assert_eq!(filter.op, UNSUPPORTED_OPERATOR);
}

// ── Update instructions ──────────────────────────────────────────

#[test]
fn update_translation_is_one_to_one() {
    let mut update = Update::new();
    update.insert("name".to_string(), Bson::String("alice".to_string()));
    update.insert("profile.level".to_string(), Bson::Int64(3));

    let mut updates = to_field_updates(update);
    updates.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].path, "name");
    assert_eq!(updates[0].value, Bson::String("alice".to_string()));
    assert_eq!(updates[1].path, "profile.level");
    assert_eq!(updates[1].value, Bson::Int64(3));
}

#[test]
fn empty_update_translates_to_no_instructions() {
    assert!(to_field_updates(Update::new()).is_empty());
}
