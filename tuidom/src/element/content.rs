#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line editable text. `cursor` counts characters, not bytes.
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        focused: bool,
    },
}

impl Content {
    /// The text carried by this content, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::TextInput { value, .. } => Some(value),
            Content::None | Content::Children(_) => None,
        }
    }
}
