use crossterm::event::{KeyCode, KeyModifiers};
use rafter::Mounted;
use tuidom::Event;
use useref_demo::UseRefExample;
use useref_demo::component::{CURRENT_VALUE_ID, FOCUS_BUTTON_ID, INPUT_ID, PREVIOUS_VALUE_ID};

fn mount() -> Mounted<UseRefExample> {
    Mounted::mount(UseRefExample::new).unwrap()
}

fn current(m: &Mounted<UseRefExample>) -> &str {
    m.text_of(CURRENT_VALUE_ID).unwrap()
}

fn previous(m: &Mounted<UseRefExample>) -> &str {
    m.text_of(PREVIOUS_VALUE_ID).unwrap()
}

fn edit(m: &mut Mounted<UseRefExample>, text: &str) {
    m.dispatch(&Event::Change {
        target: INPUT_ID.to_string(),
        text: text.to_string(),
    })
    .unwrap();
}

fn screen(m: &Mounted<UseRefExample>) -> Vec<String> {
    let buf = m.snapshot();
    (0..buf.height()).map(|y| buf.row_text(y)).collect()
}

// ============================================================================
// Initial Render
// ============================================================================

#[test]
fn test_initial_values_are_empty() {
    let m = mount();

    assert_eq!(current(&m), "Current Value: ");
    assert_eq!(previous(&m), "Previous Value: ");
    assert_eq!(m.text_of(INPUT_ID), Some(""));
    assert_eq!(m.text_of(FOCUS_BUTTON_ID), Some("Focus Input"));
    assert_eq!(m.focused(), None);
}

#[test]
fn test_input_handle_bound_after_mount() {
    let m = mount();

    assert!(m.component().input_ref().is_mounted());
    assert_eq!(m.component().input_ref().id(), Some(INPUT_ID.to_string()));
}

#[test]
fn test_screen_shows_placeholder_and_labels() {
    let m = mount();
    let rows = screen(&m);

    assert!(rows.iter().any(|row| row.contains("Type something...")));
    assert!(rows.iter().any(|row| row.contains("Focus Input")));
    assert!(rows.iter().any(|row| row.contains("Previous Value:")));
}

// ============================================================================
// Previous Value Tracking
// ============================================================================

#[test]
fn test_typing_a_then_ab() {
    let mut m = mount();

    m.type_text(INPUT_ID, "ab").unwrap();

    assert_eq!(current(&m), "Current Value: ab");
    assert_eq!(previous(&m), "Previous Value: a");
}

#[test]
fn test_typing_x_xy_xyz() {
    let mut m = mount();

    m.type_text(INPUT_ID, "x").unwrap();
    assert_eq!(previous(&m), "Previous Value: ");

    m.type_text(INPUT_ID, "y").unwrap();
    assert_eq!(previous(&m), "Previous Value: x");

    m.type_text(INPUT_ID, "z").unwrap();
    assert_eq!(current(&m), "Current Value: xyz");
    assert_eq!(previous(&m), "Previous Value: xy");
}

#[test]
fn test_previous_trails_by_one_edit() {
    let mut m = mount();
    let edits = ["hello", "world", "", "  spaced  ", "ünïcödé"];

    for (n, text) in edits.iter().enumerate() {
        edit(&mut m, text);

        let expected_previous = if n == 0 { "" } else { edits[n - 1] };
        assert_eq!(current(&m), format!("Current Value: {text}"));
        assert_eq!(previous(&m), format!("Previous Value: {expected_previous}"));
        assert_eq!(m.text_of(INPUT_ID), Some(*text));
    }
}

#[test]
fn test_backspace_counts_as_an_edit() {
    let mut m = mount();

    m.type_text(INPUT_ID, "abc").unwrap();
    m.press(KeyCode::Backspace, KeyModifiers::NONE).unwrap();

    assert_eq!(current(&m), "Current Value: ab");
    assert_eq!(previous(&m), "Previous Value: abc");
}

#[test]
fn test_slot_catches_up_after_render() {
    let mut m = mount();

    m.type_text(INPUT_ID, "ab").unwrap();

    // The display read the slot before the effect ran; the slot now holds
    // the value that render showed as current.
    assert_eq!(m.component().input_value(), "ab");
    assert_eq!(m.component().previous_value(), "ab");
}

#[test]
fn test_one_render_per_edit() {
    let mut m = mount();
    let before = m.renders();

    m.type_text(INPUT_ID, "abc").unwrap();

    assert_eq!(m.renders(), before + 3);
}

// ============================================================================
// Focus Input
// ============================================================================

#[test]
fn test_focus_button_focuses_input() {
    let mut m = mount();

    assert!(m.click(FOCUS_BUTTON_ID).unwrap());

    assert_eq!(m.focused(), Some(INPUT_ID));
    assert_eq!(current(&m), "Current Value: ");
    assert_eq!(previous(&m), "Previous Value: ");
}

#[test]
fn test_focus_button_never_changes_values() {
    let mut m = mount();
    m.type_text(INPUT_ID, "keep").unwrap();
    let renders = m.renders();

    m.click(FOCUS_BUTTON_ID).unwrap();
    m.click(FOCUS_BUTTON_ID).unwrap();

    assert_eq!(m.renders(), renders);
    assert_eq!(m.component().input_value(), "keep");
    assert_eq!(current(&m), "Current Value: keep");
    assert_eq!(previous(&m), "Previous Value: kee");
}

#[test]
fn test_focus_button_from_keyboard() {
    let mut m = mount();

    m.press(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    m.press(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert_eq!(m.focused(), Some(FOCUS_BUTTON_ID));

    m.press(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(m.focused(), Some(INPUT_ID));

    // Typing now goes to the input
    m.press(KeyCode::Char('q'), KeyModifiers::NONE).unwrap();
    assert_eq!(current(&m), "Current Value: q");
}

#[test]
fn test_focus_after_unmount_is_noop() {
    let m = mount();
    let handle = m.component().input_ref().clone();

    m.unmount();

    assert!(!handle.is_mounted());
    assert!(!handle.focus());
}
