use palette::{Clamp, FromColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Resolve to a terminal color. Oklch values outside the sRGB gamut are clamped.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Color::Rgb { r, g, b } => Rgb::new(r, g, b),
            Color::Oklch { l, c, h } => {
                let srgb = Srgb::from_color(Oklch::new(l, c, h)).clamp();
                let srgb: Srgb<u8> = srgb.into_format();
                Rgb::new(srgb.red, srgb.green, srgb.blue)
            }
        }
    }
}
