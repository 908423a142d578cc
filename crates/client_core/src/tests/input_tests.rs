use super::*;
use shared::domain::Relation;

#[test]
fn default_input_is_linear_orders_of_size_four() {
    let input = RawInput::default();
    assert_eq!(input.mode(), InputMode::LinearOrders);
    assert_eq!(input.size(), 4);
    assert!(input.validate().is_valid());
}

#[test]
fn blur_adopts_the_first_line_length_in_linear_orders_mode() {
    let mut input = RawInput::default();
    input.set_text("123\n321");
    input.sync_size();
    assert_eq!(input.size(), 3);

    // blank text leaves the size alone
    input.set_text("  \n");
    input.sync_size();
    assert_eq!(input.size(), 3);
}

#[test]
fn switching_to_poset_mode_grows_size_to_the_largest_reference() {
    let mut input = RawInput::default();
    input.set_text("1,6\n2,3");
    input.set_mode(InputMode::Poset);
    assert_eq!(input.size(), 6);

    // grow-only: smaller references never shrink it back
    input.set_text("1,2");
    input.sync_size();
    assert_eq!(input.size(), 6);
}

#[test]
fn slider_sizes_are_clamped_to_the_control_bounds() {
    let mut input = RawInput::default();
    input.set_size(1);
    assert_eq!(input.size(), MIN_SIZE);
    input.set_size(9);
    assert_eq!(input.size(), MAX_SIZE);
}

#[test]
fn draw_input_dispatches_on_the_selected_mode() {
    let mut input = RawInput::default();
    input.set_text(" 1234 \n4321");
    assert_eq!(
        input.draw_input(),
        Ok(DrawInput::LinearOrders(vec![
            "1234".to_string(),
            "4321".to_string()
        ]))
    );

    input.set_mode(InputMode::Poset);
    input.set_text("1,2\n2,3");
    assert_eq!(
        input.draw_input(),
        Ok(DrawInput::Poset(vec![Relation(1, 2), Relation(2, 3)]))
    );

    input.set_text("garbage");
    let err = input.draw_input().expect_err("must fail");
    assert!(err.contains("'garbage'"), "got: {err}");
}

#[test]
fn validate_reflects_the_current_mode_and_size() {
    let mut input = RawInput::default();
    input.set_text("12");
    assert!(!input.validate().is_valid());

    input.sync_size();
    assert!(input.validate().is_valid());

    input.set_mode(InputMode::Poset);
    input.set_text("1,2");
    assert!(input.validate().is_valid());
}
