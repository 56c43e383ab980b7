//! Component output: an element tree with handlers and refs attached.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tuidom::{Content, Edges, Element, Size, Style};

use crate::node_ref::NodeRef;

pub(crate) type ClickHandler = Rc<dyn Fn()>;
pub(crate) type TextHandler = Rc<dyn Fn(&str)>;

/// Handlers collected from one render, keyed by element id.
#[derive(Default, Clone)]
pub(crate) struct Handlers {
    pub on_click: HashMap<String, ClickHandler>,
    pub on_change: HashMap<String, TextHandler>,
    pub on_submit: HashMap<String, TextHandler>,
}

/// One element of a component's output.
///
/// Wraps a [`tuidom::Element`] and carries the callbacks and [`NodeRef`] that
/// the host wires up when the render is committed.
///
/// ```ignore
/// Node::col()
///     .child(Node::input(value.get()).id("name").on_change(move |text| value.set(text.to_string())))
///     .child(Node::button("Clear").on_click(move || value.set(String::new())))
/// ```
pub struct Node {
    element: Element,
    children: Vec<Node>,
    on_click: Option<ClickHandler>,
    on_change: Option<TextHandler>,
    on_submit: Option<TextHandler>,
    node_ref: Option<NodeRef>,
}

impl Node {
    /// Wrap an existing element. Children already inside it are kept as-is.
    pub fn element(element: Element) -> Self {
        Self {
            element,
            children: Vec::new(),
            on_click: None,
            on_change: None,
            on_submit: None,
            node_ref: None,
        }
    }

    pub fn col() -> Self {
        Self::element(Element::col())
    }

    pub fn row() -> Self {
        Self::element(Element::row())
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::element(Element::text(content))
    }

    /// A single-line text input showing `value`.
    pub fn input(value: impl Into<String>) -> Self {
        Self::element(Element::text_input(value))
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::element(Element::button(label))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element = self.element.id(id);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn width(self, width: Size) -> Self {
        self.map(|el| el.width(width))
    }

    pub fn gap(self, gap: u16) -> Self {
        self.map(|el| el.gap(gap))
    }

    pub fn padding(self, padding: Edges) -> Self {
        self.map(|el| el.padding(padding))
    }

    pub fn style(self, style: Style) -> Self {
        self.map(|el| el.style(style))
    }

    pub fn style_focused(self, style: Style) -> Self {
        self.map(|el| el.style_focused(style))
    }

    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.map(|el| el.placeholder(text))
    }

    /// Apply any other element builder.
    pub fn map(mut self, f: impl FnOnce(Element) -> Element) -> Self {
        self.element = f(self.element);
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.element.clickable = true;
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Called with the full new text after every edit of an input.
    pub fn on_change(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Called with the input's text when Enter is pressed in it.
    pub fn on_submit(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_submit = Some(Rc::new(handler));
        self
    }

    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    pub fn element_id(&self) -> &str {
        &self.element.id
    }

    /// Flatten into a plain element tree, moving handlers and refs out.
    pub(crate) fn commit(self, handlers: &mut Handlers, refs: &mut Vec<(NodeRef, String)>) -> Element {
        let Node {
            mut element,
            children,
            on_click,
            on_change,
            on_submit,
            node_ref,
        } = self;

        let id = element.id.clone();
        if let Some(handler) = on_click {
            handlers.on_click.insert(id.clone(), handler);
        }
        if let Some(handler) = on_change {
            handlers.on_change.insert(id.clone(), handler);
        }
        if let Some(handler) = on_submit {
            handlers.on_submit.insert(id.clone(), handler);
        }
        if let Some(node_ref) = node_ref {
            refs.push((node_ref, id));
        }

        if !children.is_empty() {
            let committed = children
                .into_iter()
                .map(|child| child.commit(handlers, refs));
            if matches!(element.content, Content::Children(_) | Content::None) {
                element = element.children(committed);
            } else {
                log::warn!("[node] children on leaf element {} dropped", element.id);
            }
        }

        element
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.element.id)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .field("node_ref", &self.node_ref)
            .finish()
    }
}
