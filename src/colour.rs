/// A colour, expressed in the RGB colour space with optional opacity, or as a grey level
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// Opaque RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// RGB colour with alpha; all components range from 0.0 to 1.0
    RGBA { r: f32, g: f32, b: f32, a: f32 },
    /// Opaque grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new translucent colour. All components range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour::RGBA { r, g, b, a }
    }

    /// Create a new translucent colour. All components range from 0 to 255
    pub fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour::RGBA {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a new grey level, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new grey level, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }

    /// The colour as straight (non-premultiplied) RGBA components, clamped to 0.0..=1.0
    pub fn components(&self) -> [f32; 4] {
        let [r, g, b, a] = match *self {
            Colour::RGB { r, g, b } => [r, g, b, 1.0],
            Colour::RGBA { r, g, b, a } => [r, g, b, a],
            Colour::Grey { g } => [g, g, g, 1.0],
        };
        [r, g, b, a].map(|c| c.clamp(0.0, 1.0))
    }

    /// The colour as RGBA bytes
    pub fn to_bytes(&self) -> [u8; 4] {
        self.components().map(|c| (c * 255.0).round() as u8)
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::RGBA {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
            a: c.3.into(),
        }
    }
}

impl From<Colour> for tiny_skia::Color {
    fn from(c: Colour) -> Self {
        let [r, g, b, a] = c.to_bytes();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba(c.to_bytes())
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Colour::new_rgba_bytes(r, g, b, a)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Light grey (200/255), a good backdrop for demos
    pub const GREY: Colour = Colour::Grey { g: 200.0 / 255.0 };
    /// Dark grey (50/255), used for drop shadows
    pub const SHADOW: Colour = Colour::Grey { g: 50.0 / 255.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0x54 as f32 / 255.0,
        g: 0xB1 as f32 / 255.0,
        b: 0x49 as f32 / 255.0,
    };
}
