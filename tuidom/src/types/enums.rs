#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    Fill,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Cells taken by the border on each side.
    pub const fn thickness(self) -> u16 {
        match self {
            Border::None => 0,
            Border::Single | Border::Rounded => 1,
        }
    }

    /// Corner and edge glyphs: top-left, top-right, bottom-left, bottom-right, horizontal, vertical.
    pub const fn glyphs(self) -> Option<[char; 6]> {
        match self {
            Border::None => None,
            Border::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
            Border::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reverse: false,
        }
    }
}
