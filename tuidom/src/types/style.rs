use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    /// Layer `other` on top of this style. Set fields in `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            border: if other.border == Border::None {
                self.border
            } else {
                other.border
            },
            text_style: TextStyle {
                bold: self.text_style.bold || other.text_style.bold,
                dim: self.text_style.dim || other.text_style.dim,
                italic: self.text_style.italic || other.text_style.italic,
                underline: self.text_style.underline || other.text_style.underline,
                reverse: self.text_style.reverse || other.text_style.reverse,
            },
        }
    }
}
