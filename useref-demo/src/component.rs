//! A text input that remembers its previous value and a button that focuses it.

use rafter::prelude::*;
use tuidom::Border;

pub const INPUT_ID: &str = "input";
pub const FOCUS_BUTTON_ID: &str = "focus-button";
pub const CURRENT_VALUE_ID: &str = "current-value";
pub const PREVIOUS_VALUE_ID: &str = "previous-value";

/// Shows what was typed and what was there one render earlier.
///
/// `input_value` is reactive: every edit replaces it and triggers a render.
/// `previous_value` is a plain slot an effect fills after each render in which
/// the input changed, so the render that reads it always sees the value from
/// the render before. `input_ref` is bound to the input while it is mounted
/// and only used to focus it.
pub struct UseRefExample {
    input_value: State<String>,
    previous_value: Ref<String>,
    input_ref: NodeRef,
}

impl UseRefExample {
    pub fn new(scheduler: &Scheduler) -> Self {
        Self {
            input_value: scheduler.state(String::new()),
            previous_value: Ref::new(String::new()),
            input_ref: NodeRef::new(),
        }
    }

    pub fn input_value(&self) -> String {
        self.input_value.get()
    }

    /// Contents of the slot right now. After a render settles this already
    /// holds the value that render displayed as current.
    pub fn previous_value(&self) -> String {
        self.previous_value.get()
    }

    pub fn input_ref(&self) -> &NodeRef {
        &self.input_ref
    }
}

impl Component for UseRefExample {
    fn render(&self, cx: &mut RenderContext<'_>) -> Node {
        let value = self.input_value.get();
        let previous = self.previous_value.get();

        let slot = self.previous_value.clone();
        let latest = value.clone();
        cx.effect(value.clone(), move || slot.set(latest));

        let input_value = self.input_value.clone();
        let input_ref = self.input_ref.clone();

        let accent = Color::oklch(0.72, 0.12, 250.0);
        let field = Style::new()
            .background(Color::oklch(0.25, 0.02, 250.0))
            .border(Border::Rounded);

        Node::col()
            .padding(Edges::all(1))
            .gap(1)
            .child(Node::text("Use Ref Example").style(Style::new().bold().foreground(accent)))
            .child(
                Node::row()
                    .gap(2)
                    .child(
                        Node::input(value.clone())
                            .id(INPUT_ID)
                            .width(Size::Fixed(32))
                            .placeholder("Type something...")
                            .style(field)
                            .style_focused(Style::new().foreground(accent))
                            .node_ref(&self.input_ref)
                            .on_change(move |text| input_value.set(text.to_string())),
                    )
                    .child(
                        Node::button("Focus Input")
                            .id(FOCUS_BUTTON_ID)
                            .style(Style::new().border(Border::Single))
                            .style_focused(Style::new().bold().foreground(accent))
                            .on_click(move || {
                                if !input_ref.focus() {
                                    log::trace!("focus requested while input is unmounted");
                                }
                            }),
                    ),
            )
            .child(Node::text(format!("Current Value: {value}")).id(CURRENT_VALUE_ID))
            .child(Node::text(format!("Previous Value: {previous}")).id(PREVIOUS_VALUE_ID))
            .child(Node::text("Tab to move, Ctrl+Q to quit").style(Style::new().dim()))
    }

    fn on_mount(&self) {
        log::debug!("use ref example mounted");
    }
}
