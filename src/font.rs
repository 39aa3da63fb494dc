use crate::error::{Result, TextError};
use crate::format::FontChoice;
use crate::render::{FontSpec, LineMetrics, MeasureText};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// Pixels per em at a [`FormatConfig::scale`](crate::FormatConfig::scale) of 1.0
pub const PX_PER_SCALE: f32 = 32.0;

/// A parsed TrueType or OpenType font.
///
/// Fonts are registered in a [`FontBook`] and referred to by their [`Id`]
/// through [`FontChoice`].
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// The font's family name, if its name table records one in Unicode
    pub fn family(&self) -> Option<String> {
        let names = self.face.as_face_ref().names();
        names
            .into_iter()
            .filter(|name| name.name_id == owned_ttf_parser::name_id::FAMILY)
            .find_map(|name| name.to_string())
    }

    /// Pixels per font unit at the given pixel size
    pub fn scaling(&self, size: f32) -> f32 {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given size
    pub fn ascent(&self, size: f32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given size.
    /// Note: this is usually negative
    pub fn descent(&self, size: f32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Height of capital letters above the baseline, falling back to the ascent
    /// for fonts that don't record it
    pub fn cap_height(&self, size: f32) -> f32 {
        match self.face.as_face_ref().capital_height() {
            Some(h) if h > 0 => self.scaling(size) * h as f32,
            _ => self.ascent(size),
        }
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph to draw for `ch`: its own, the replacement character, or `?`
    pub fn glyph_or_replacement(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch).or_else(|| {
            log::warn!("font has no glyph for {ch:?}, substituting");
            self.replacement_glyph_id().or_else(|| self.glyph_id('?'))
        })
    }

    /// Horizontal advance of a glyph, in pixels
    pub fn advance(&self, gid: u16, size: f32) -> f32 {
        self.scaling(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(GlyphId(gid))
                .unwrap_or_default() as f32
    }

    /// Calculate the width of a given string of text at the given pixel size
    pub fn width_of_text(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .filter_map(|ch| self.glyph_or_replacement(ch))
            .map(|gid| self.advance(gid, size))
            .sum()
    }
}

/// The set of fonts text can be measured and drawn with.
///
/// The first font added is used wherever a format leaves its font as
/// [`FontChoice::Default`].
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    default: Option<Id<Font>>,
}

impl FontBook {
    /// Add a font to the book, returning the id it can be selected with
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        if self.default.is_none() {
            self.default = Some(id);
        }
        log::debug!(
            "registered font {id:?} ({})",
            self.fonts[id].family().as_deref().unwrap_or("unnamed")
        );
        id
    }

    /// Read, parse and add a font file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Id<Font>> {
        let bytes = std::fs::read(path.as_ref())?;
        let font = Font::load(bytes)?;
        Ok(self.add_font(font))
    }

    /// Use `id` for formats that don't pick a font
    pub fn set_default(&mut self, id: Id<Font>) -> Result<()> {
        if self.fonts.get(id).is_none() {
            return Err(TextError::UnknownFont(id));
        }
        self.default = Some(id);
        Ok(())
    }

    pub fn get(&self, choice: FontChoice) -> Result<&Font> {
        match choice {
            FontChoice::Default => self
                .default
                .and_then(|id| self.fonts.get(id))
                .ok_or(TextError::NoFonts),
            FontChoice::Id(id) => self.fonts.get(id).ok_or(TextError::UnknownFont(id)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.len() == 0
    }
}

impl MeasureText for FontBook {
    fn measure_line(&self, text: &str, spec: &FontSpec) -> Result<LineMetrics> {
        let font = self.get(spec.font)?;
        let size = spec.scale as f32 * PX_PER_SCALE;
        let stroke = spec.thickness.max(0);
        // half of the stroke spills past the outline on every side
        let spill = (stroke + 1) / 2;

        Ok(LineMetrics {
            width: font.width_of_text(text, size).round() as i32 + stroke,
            height: font.cap_height(size).round() as i32 + spill,
            baseline: (-font.descent(size)).round() as i32 + spill,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEJAVU: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

    fn dejavu() -> FontBook {
        let mut book = FontBook::default();
        book.add_font(Font::load(DEJAVU.to_vec()).expect("can load font"));
        book
    }

    fn spec(thickness: i32) -> FontSpec {
        FontSpec {
            font: FontChoice::Default,
            scale: 1.0,
            thickness,
        }
    }

    #[test]
    fn reads_the_family_name() {
        let book = dejavu();
        assert_eq!(book.get(FontChoice::Default).unwrap().family().as_deref(), Some("DejaVu Sans"));
    }

    #[test]
    fn line_metrics_include_the_stroke() {
        let book = dejavu();
        // 2048 units per em at 32px: advances H 1540 + g 1300, ascender 1901
        // (no cap height recorded), descender -483
        assert_eq!(
            book.measure_line("Hg", &spec(2)).unwrap(),
            LineMetrics {
                width: 44 + 2,
                height: 30 + 1,
                baseline: 8 + 1,
            }
        );
        assert_eq!(
            book.measure_line("H", &spec(0)).unwrap(),
            LineMetrics {
                width: 24,
                height: 30,
                baseline: 8,
            }
        );
        // odd strokes spill the larger half
        assert_eq!(
            book.measure_line("H", &spec(3)).unwrap(),
            LineMetrics {
                width: 27,
                height: 32,
                baseline: 10,
            }
        );
    }

    #[test]
    fn scale_multiplies_the_pixel_size() {
        let book = dejavu();
        let big = FontSpec {
            scale: 2.0,
            ..spec(0)
        };
        // 5191 units for "Hello" -> 81.1px at 32px, 162.2px at 64px
        assert_eq!(book.measure_line("Hello", &spec(0)).unwrap().width, 81);
        assert_eq!(book.measure_line("Hello", &big).unwrap().width, 162);
    }

    #[test]
    fn default_font_can_be_switched() {
        let mut book = dejavu();
        let second = book.add_font(Font::load(DEJAVU.to_vec()).unwrap());
        let default = book.get(FontChoice::Default).unwrap();
        assert!(!std::ptr::eq(default, &book.fonts[second]));

        book.set_default(second).unwrap();
        let default = book.get(FontChoice::Default).unwrap();
        assert!(std::ptr::eq(default, &book.fonts[second]));
    }

    #[test]
    fn ids_from_another_book_are_unknown() {
        let foreign = dejavu().add_font(Font::load(DEJAVU.to_vec()).unwrap());
        let mut book = dejavu();
        assert!(matches!(book.set_default(foreign), Err(TextError::UnknownFont(_))));
        assert!(matches!(
            book.get(FontChoice::Id(foreign)),
            Err(TextError::UnknownFont(_))
        ));
    }

    #[test]
    fn empty_book_cannot_measure() {
        let book = FontBook::default();
        assert!(book.is_empty());
        let spec = FontSpec {
            font: FontChoice::Default,
            scale: 1.0,
            thickness: 2,
        };
        assert!(matches!(
            book.measure_line("x", &spec),
            Err(TextError::NoFonts)
        ));
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(
            Font::load(b"definitely not a font".to_vec()),
            Err(TextError::FaceParsing(_))
        ));
    }

    #[test]
    fn missing_files_are_io_errors() {
        let mut book = FontBook::default();
        assert!(matches!(
            book.load_file("/nonexistent/font.ttf"),
            Err(TextError::Io(_))
        ));
    }
}
