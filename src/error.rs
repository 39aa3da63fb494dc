use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to encode, decode or save an image
    Image(#[from] image::ImageError),

    #[error("font {0:?} is not registered in the font book")]
    /// A format referred to a font that the [FontBook](crate::FontBook) does not hold
    UnknownFont(id_arena::Id<crate::Font>),

    #[error("the font book is empty; load at least one font before measuring text")]
    /// Text was measured with the default font, but no font was ever loaded
    NoFonts,

    #[error("cannot create a {width}x{height} canvas")]
    /// The requested canvas has a zero or oversized dimension
    InvalidCanvasSize { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, TextError>;
