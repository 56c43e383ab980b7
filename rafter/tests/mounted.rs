use crossterm::event::{KeyCode, KeyModifiers};
use rafter::tuidom::{find_element, Content, Event, Key, MouseButton, Rect, Size};
use rafter::{Component, Mounted, Node, NodeRef, Ref, RenderContext, RuntimeConfig, RuntimeError, Scheduler, State};

fn click_event(id: &str) -> Event {
    Event::Click {
        target: Some(id.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Test components
// ============================================================================

struct Counter {
    count: State<i32>,
}

impl Counter {
    fn new(scheduler: &Scheduler) -> Self {
        Self {
            count: scheduler.state(0),
        }
    }
}

impl Component for Counter {
    fn render(&self, _cx: &mut RenderContext<'_>) -> Node {
        let count = self.count.clone();
        Node::col()
            .id("root")
            .width(Size::Fill)
            .child(Node::text(format!("Count: {}", self.count.get())).id("count"))
            .child(
                Node::button("+")
                    .id("inc")
                    .on_click(move || count.update(|c| *c += 1)),
            )
    }
}

/// Input bound to state, with an effect logging every value it sees.
struct Echo {
    value: State<String>,
    seen: Ref<Vec<String>>,
    mounted_in_effect: Ref<Vec<bool>>,
    submitted: Ref<Option<String>>,
    input: NodeRef,
    scheduler: Scheduler,
}

impl Echo {
    fn new(scheduler: &Scheduler) -> Self {
        Self {
            value: scheduler.state(String::new()),
            seen: Ref::default(),
            mounted_in_effect: Ref::default(),
            submitted: Ref::default(),
            input: NodeRef::new(),
            scheduler: scheduler.clone(),
        }
    }
}

impl Component for Echo {
    fn render(&self, cx: &mut RenderContext<'_>) -> Node {
        let value = self.value.get();

        let seen = self.seen.clone();
        let mounted = self.mounted_in_effect.clone();
        let input = self.input.clone();
        let observed = value.clone();
        cx.effect(value.clone(), move || {
            mounted.with_mut(|m| m.push(input.is_mounted()));
            seen.with_mut(|s| s.push(observed));
        });

        let state = self.value.clone();
        let submitted = self.submitted.clone();
        let scheduler = self.scheduler.clone();
        Node::col()
            .child(
                Node::input(value.clone())
                    .id("field")
                    .node_ref(&self.input)
                    .on_change(move |text| state.set(text.to_string()))
                    .on_submit(move |text| submitted.set(Some(text.to_string()))),
            )
            .child(Node::text(format!("Value: {value}")).id("value"))
            .child(
                Node::button("Refresh")
                    .id("refresh")
                    .on_click(move || scheduler.request_render()),
            )
    }
}

/// Input that can be removed from the tree, plus a button that focuses it.
struct Toggle {
    show: State<bool>,
    input: NodeRef,
    last_focus: Ref<Option<bool>>,
    unmounted: Ref<bool>,
}

impl Toggle {
    fn new(scheduler: &Scheduler) -> Self {
        Self {
            show: scheduler.state(true),
            input: NodeRef::new(),
            last_focus: Ref::default(),
            unmounted: Ref::default(),
        }
    }
}

impl Component for Toggle {
    fn render(&self, _cx: &mut RenderContext<'_>) -> Node {
        let show = self.show.clone();
        let input = self.input.clone();
        let last_focus = self.last_focus.clone();

        let mut root = Node::col();
        if self.show.get() {
            root = root.child(Node::input("").id("field").node_ref(&self.input));
        }
        root.child(
            Node::button("Toggle")
                .id("toggle")
                .on_click(move || show.update(|s| *s = !*s)),
        )
        .child(
            Node::button("Focus")
                .id("focus")
                .on_click(move || last_focus.set(Some(input.focus()))),
        )
    }

    fn on_unmount(&self) {
        self.unmounted.set(true);
    }
}

/// Effect that writes the state it depends on, so it never settles.
struct Runaway {
    count: State<u32>,
}

impl Component for Runaway {
    fn render(&self, cx: &mut RenderContext<'_>) -> Node {
        let count = self.count.clone();
        cx.effect(self.count.get(), move || count.update(|c| *c += 1));
        Node::text("runaway")
    }
}

// ============================================================================
// Mount and Settle
// ============================================================================

#[test]
fn test_mount_renders_once() {
    let m = Mounted::mount(Counter::new).unwrap();

    assert_eq!(m.renders(), 1);
    assert_eq!(m.text_of("count"), Some("Count: 0"));
    assert_eq!(m.focused(), None);
}

#[test]
fn test_settle_without_changes_does_nothing() {
    let mut m = Mounted::mount(Counter::new).unwrap();

    assert_eq!(m.settle().unwrap(), 0);
    assert_eq!(m.renders(), 1);
}

#[test]
fn test_click_handler_rerenders() {
    let mut m = Mounted::mount(Counter::new).unwrap();

    assert!(m.click("inc").unwrap());
    assert!(m.click("inc").unwrap());

    assert_eq!(m.text_of("count"), Some("Count: 2"));
    assert_eq!(m.renders(), 3);
    assert_eq!(m.component().count.get(), 2);
    // Clicking a button focuses it
    assert_eq!(m.focused(), Some("inc"));
}

#[test]
fn test_click_missing_element_is_unhandled() {
    let mut m = Mounted::mount(Counter::new).unwrap();

    assert!(!m.click("nope").unwrap());
    assert!(!m.dispatch(&click_event("count")).unwrap());
    assert_eq!(m.renders(), 1);
}

#[test]
fn test_settle_limit_stops_runaway_effects() {
    let config = RuntimeConfig::new("runaway").max_settle_passes(4);
    let result = Mounted::mount_with(config, |s| Runaway { count: s.state(0) });

    assert!(matches!(
        result,
        Err(RuntimeError::SettleLimit { passes: 4 })
    ));
}

#[test]
fn test_snapshot_paints_frame() {
    let m = Mounted::mount(Counter::new).unwrap();
    let buf = m.snapshot();

    assert_eq!(buf.width(), 80);
    assert!(buf.row_text(0).starts_with("Count: 0"));
    assert!(buf.row_text(1).starts_with(" + "));
}

#[test]
fn test_resize_updates_layout() {
    let mut m = Mounted::mount(Counter::new).unwrap();
    assert_eq!(m.layout().get("root").map(|r| r.width), Some(80));

    m.dispatch(&Event::Resize {
        width: 100,
        height: 30,
    })
    .unwrap();

    assert_eq!(m.layout().get("root"), Some(&Rect::new(0, 0, 100, 2)));
}

// ============================================================================
// Effects
// ============================================================================

#[test]
fn test_effect_runs_after_first_commit() {
    let m = Mounted::mount(Echo::new).unwrap();
    let echo = m.component();

    assert_eq!(echo.seen.get(), vec![String::new()]);
    // The ref was bound before the effect ran
    assert_eq!(echo.mounted_in_effect.get(), vec![true]);
}

#[test]
fn test_effect_runs_once_per_dependency_change() {
    let mut m = Mounted::mount(Echo::new).unwrap();

    assert!(m.type_text("field", "hi").unwrap());

    assert_eq!(m.text_of("field"), Some("hi"));
    assert_eq!(m.text_of("value"), Some("Value: hi"));
    assert_eq!(m.component().seen.get(), vec!["", "h", "hi"]);
}

#[test]
fn test_effect_skipped_when_dependency_unchanged() {
    let mut m = Mounted::mount(Echo::new).unwrap();
    let before = m.renders();

    m.dispatch(&click_event("refresh")).unwrap();

    assert_eq!(m.renders(), before + 1);
    assert_eq!(m.component().seen.get().len(), 1);
}

#[test]
fn test_type_text_rejects_non_inputs() {
    let mut m = Mounted::mount(Echo::new).unwrap();

    assert!(!m.type_text("refresh", "x").unwrap());
    assert!(!m.type_text("missing", "x").unwrap());
    assert_eq!(m.component().value.get(), "");
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_tab_then_enter_activates_button() {
    let mut m = Mounted::mount(Counter::new).unwrap();

    m.press(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert_eq!(m.focused(), Some("inc"));

    m.press(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(m.text_of("count"), Some("Count: 1"));
}

#[test]
fn test_escape_with_nothing_focused_is_unhandled() {
    let mut m = Mounted::mount(Counter::new).unwrap();

    let unhandled = m.press(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(matches!(
        unhandled.as_slice(),
        [Event::Key {
            target: None,
            key: Key::Escape,
            ..
        }]
    ));
}

#[test]
fn test_submit_passes_input_text() {
    let mut m = Mounted::mount(Echo::new).unwrap();

    m.type_text("field", "done").unwrap();
    m.press(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(m.component().submitted.get(), Some("done".to_string()));
}

#[test]
fn test_backspace_edits_controlled_input() {
    let mut m = Mounted::mount(Echo::new).unwrap();

    m.type_text("field", "abc").unwrap();
    m.press(KeyCode::Backspace, KeyModifiers::NONE).unwrap();

    assert_eq!(m.component().value.get(), "ab");
    assert_eq!(m.text_of("value"), Some("Value: ab"));
}

#[test]
fn test_caret_moves_without_rerender() {
    let mut m = Mounted::mount(Echo::new).unwrap();
    m.type_text("field", "ac").unwrap();
    let renders = m.renders();

    m.press(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(m.renders(), renders);
    assert!(matches!(
        find_element(m.frame(), "field").map(|el| &el.content),
        Some(Content::TextInput { cursor: 1, .. })
    ));

    m.press(KeyCode::Char('b'), KeyModifiers::NONE).unwrap();
    assert_eq!(m.component().value.get(), "abc");
}

// ============================================================================
// NodeRef
// ============================================================================

#[test]
fn test_node_ref_bound_on_commit() {
    let m = Mounted::mount(Toggle::new).unwrap();
    let toggle = m.component();

    assert!(toggle.input.is_mounted());
    assert_eq!(toggle.input.id(), Some("field".to_string()));
}

#[test]
fn test_node_ref_focus_moves_focus() {
    let mut m = Mounted::mount(Toggle::new).unwrap();

    m.click("focus").unwrap();

    assert_eq!(m.focused(), Some("field"));
    assert_eq!(m.component().last_focus.get(), Some(true));
}

#[test]
fn test_node_ref_unbound_when_element_removed() {
    let mut m = Mounted::mount(Toggle::new).unwrap();

    m.click("toggle").unwrap();
    assert!(!m.component().input.is_mounted());
    assert_eq!(m.component().input.id(), None);

    m.click("focus").unwrap();
    assert_eq!(m.component().last_focus.get(), Some(false));
    // Focus stays on the button that was clicked
    assert_eq!(m.focused(), Some("focus"));
}

#[test]
fn test_focus_dropped_when_focused_element_removed() {
    let mut m = Mounted::mount(Toggle::new).unwrap();

    m.click("focus").unwrap();
    assert_eq!(m.focused(), Some("field"));

    m.dispatch(&click_event("toggle")).unwrap();
    assert_eq!(m.focused(), None);
}

#[test]
fn test_unmount_unbinds_refs_and_notifies() {
    let m = Mounted::mount(Toggle::new).unwrap();
    let input = m.component().input.clone();
    let unmounted = m.component().unmounted.clone();

    m.unmount();

    assert!(!input.is_mounted());
    assert!(!input.focus());
    assert!(unmounted.get());
}
