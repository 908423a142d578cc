use super::*;
use shared::domain::InputMode;

use crate::controller::request_key;

#[test]
fn permutations_of_every_slider_size_are_valid() {
    let samples: [(usize, &str); 5] = [
        (2, "12\n21"),
        (3, "123\n312"),
        (4, "1234\n4321\n3214"),
        (5, "12345\n54321"),
        (6, "123456\n654321"),
    ];

    for (size, text) in samples {
        let outcome = validate(InputMode::LinearOrders, size, text);
        assert!(outcome.is_valid(), "size {size} should accept {text:?}");
    }
}

#[test]
fn all_blank_input_is_valid_in_both_modes() {
    assert!(validate(InputMode::LinearOrders, 4, "").is_valid());
    assert!(validate(InputMode::LinearOrders, 4, "\n  \n\t\n").is_valid());
    assert!(validate(InputMode::Poset, 4, "\n\n").is_valid());
}

#[test]
fn wrong_length_line_is_named_in_the_message() {
    let outcome = validate(InputMode::LinearOrders, 4, "1234\n12");
    let message = outcome.message().expect("must fail");
    assert!(message.contains("'12'"), "got: {message}");
    assert!(message.contains("does not match specified length 4"));
}

#[test]
fn duplicate_symbol_fails_with_expected_alphabet() {
    let outcome = validate(InputMode::LinearOrders, 4, "1224");
    let message = outcome.message().expect("must fail");
    assert!(message.contains("'1224'"), "got: {message}");
    assert!(message.contains("1234"), "alphabet missing: {message}");
}

#[test]
fn foreign_symbol_fails_even_with_correct_length() {
    let outcome = validate(InputMode::LinearOrders, 4, "1235");
    assert!(!outcome.is_valid());
}

#[test]
fn first_offending_line_wins() {
    let outcome = validate(InputMode::LinearOrders, 4, "1234\n12\n99");
    let message = outcome.message().expect("must fail");
    assert!(message.contains("'12'"), "got: {message}");
}

#[test]
fn cover_relation_lines_within_range_are_valid() {
    let outcome = validate(InputMode::Poset, 4, "1,2\n2,3\n 4 , 1 ");
    assert!(outcome.is_valid());
}

#[test]
fn cover_relation_grammar_violations_fail() {
    for text in ["12", "1,a", "1,2,3", "0,2", "-1,2", "1,"] {
        let outcome = validate(InputMode::Poset, 4, text);
        assert!(!outcome.is_valid(), "{text:?} should be rejected");
        assert!(
            outcome.message().expect("message").contains(text.trim()),
            "offending line not named for {text:?}"
        );
    }
}

#[test]
fn out_of_range_relation_names_the_minimal_size() {
    let outcome = validate(InputMode::Poset, 4, "1,7");
    let message = outcome.message().expect("must fail");
    assert!(message.contains('7'), "got: {message}");
}

#[test]
fn parse_linear_orders_trims_and_drops_blank_lines() {
    assert_eq!(
        parse_linear_orders(" 1234 \n\n4321\n  "),
        vec!["1234".to_string(), "4321".to_string()]
    );
}

#[test]
fn parse_cover_relations_parses_pairs() {
    assert_eq!(
        parse_cover_relations("1,2\n2,3"),
        Ok(vec![Relation(1, 2), Relation(2, 3)])
    );
}

#[test]
fn parse_cover_relations_reports_first_bad_line() {
    let err = parse_cover_relations("1,2\nnope").expect_err("must fail");
    assert!(err.contains("'nope'"), "got: {err}");
}

#[test]
fn linear_orders_size_syncs_to_first_line_length() {
    assert_eq!(synced_size_for_linear_orders("123\n4321"), Some(3));
    assert_eq!(synced_size_for_linear_orders("\n \n"), None);
}

#[test]
fn poset_size_sync_grows_but_never_shrinks() {
    assert_eq!(synced_size_for_poset(4, "1,6"), 6);
    assert_eq!(synced_size_for_poset(4, "1,2"), 4);
    assert_eq!(synced_size_for_poset(4, ""), 4);
    // unparsable lines contribute nothing
    assert_eq!(synced_size_for_poset(4, "nope\n1,5"), 5);
}

#[test]
fn request_key_trims_each_item() {
    assert_eq!(
        request_key(&[" 1234 ", "4321"]),
        vec!["1234".to_string(), "4321".to_string()]
    );
}
