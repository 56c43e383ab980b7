use tuidom::text::{display_width, tail_to_width, truncate_to_width};
use tuidom::{Element, Event, Key, Modifiers, TextEditResult, TextInputData, TextInputState};

// ============================================================================
// Width helpers
// ============================================================================

#[test]
fn test_display_width_counts_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_tail_keeps_end() {
    assert_eq!(tail_to_width("abcdef", 3), "def");
    assert_eq!(tail_to_width("ab", 5), "ab");
    assert_eq!(tail_to_width("a日本", 2), "本");
}

// ============================================================================
// Text Input Editing
// ============================================================================

fn press(state: &mut TextInputState, key: Key) -> TextEditResult {
    state.handle_key("input", key, Modifiers::new())
}

#[test]
fn test_typing_appends_at_cursor() {
    let mut state = TextInputState::new();

    assert_eq!(press(&mut state, Key::Char('a')), TextEditResult::Changed);
    assert_eq!(press(&mut state, Key::Char('b')), TextEditResult::Changed);
    assert_eq!(state.get("input"), "ab");

    press(&mut state, Key::Left);
    press(&mut state, Key::Char('x'));
    assert_eq!(state.get("input"), "axb");
    assert_eq!(state.get_data("input").map(|d| d.cursor), Some(2));
}

#[test]
fn test_backspace_and_delete() {
    let mut state = TextInputState::new();
    state.set("input", "héllo");

    assert_eq!(press(&mut state, Key::Backspace), TextEditResult::Changed);
    assert_eq!(state.get("input"), "héll");

    press(&mut state, Key::Home);
    assert_eq!(press(&mut state, Key::Backspace), TextEditResult::Handled);
    assert_eq!(press(&mut state, Key::Delete), TextEditResult::Changed);
    assert_eq!(state.get("input"), "éll");

    press(&mut state, Key::End);
    assert_eq!(press(&mut state, Key::Delete), TextEditResult::Handled);
}

#[test]
fn test_ctrl_u_clears() {
    let mut state = TextInputState::new();
    state.set("input", "abc");

    let result = state.handle_key("input", Key::Char('u'), Modifiers::ctrl());
    assert_eq!(result, TextEditResult::Changed);
    assert_eq!(state.get("input"), "");

    let result = state.handle_key("input", Key::Char('u'), Modifiers::ctrl());
    assert_eq!(result, TextEditResult::Handled);
}

#[test]
fn test_shifted_chars_insert() {
    let mut state = TextInputState::new();
    let result = state.handle_key("input", Key::Char('A'), Modifiers::shift());
    assert_eq!(result, TextEditResult::Changed);
    assert_eq!(state.get("input"), "A");
}

#[test]
fn test_set_same_text_keeps_cursor() {
    let mut state = TextInputState::new();
    state.set("input", "abc");
    press(&mut state, Key::Home);

    state.set("input", "abc");
    assert_eq!(state.get_data("input").map(|d| d.cursor), Some(0));

    state.set("input", "xyz!");
    assert_eq!(state.get_data("input"), Some(&TextInputData::new("xyz!")));
}

#[test]
fn test_process_events_turns_keys_into_change() {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("input"))
        .child(Element::button("Go").id("button"));
    let mut state = TextInputState::new();

    let events = vec![
        Event::Key {
            target: Some("input".to_string()),
            key: Key::Char('a'),
            modifiers: Modifiers::new(),
        },
        Event::Key {
            target: Some("input".to_string()),
            key: Key::Enter,
            modifiers: Modifiers::new(),
        },
        Event::Key {
            target: Some("button".to_string()),
            key: Key::Char('a'),
            modifiers: Modifiers::new(),
        },
    ];

    let output = state.process_events(&events, &root);
    assert_eq!(
        output,
        vec![
            Event::Change {
                target: "input".to_string(),
                text: "a".to_string(),
            },
            Event::Submit {
                target: "input".to_string(),
            },
            // Buttons don't capture input, so the key passes through
            events[2].clone(),
        ]
    );
}

#[test]
fn test_retain_forgets_unmounted_inputs() {
    let mut state = TextInputState::new();
    state.set("input", "abc");
    state.set("gone", "xyz");

    let root = Element::col().child(Element::text_input("").id("input"));
    state.retain(&root);

    assert_eq!(state.get("input"), "abc");
    assert!(state.get_data("gone").is_none());
}
