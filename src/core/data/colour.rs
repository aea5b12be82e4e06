/// An RGBA colour, one byte per channel, matching the layout the display
/// surface uploads directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::opaque(0, 0, 0);
    pub const WHITE: Colour = Colour::opaque(255, 255, 255);
    pub const RED: Colour = Colour::opaque(230, 41, 55);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
