//! Text formatting: the fully resolved [`FormatConfig`] used by the layout
//! engine, and the partial [`TextFormat`] that callers build, store, and chain
//! onto a [`TextBlock`](crate::TextBlock).

use crate::colour::{colours, Colour};
use crate::font::Font;
use crate::render::{FontSpec, GlyphStyle};
use id_arena::Id;
use std::fmt;

/// Horizontal alignment of each line relative to the block origin
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HorzAlign {
    /// Lines start at the origin
    #[default]
    Left,
    /// Lines end at the origin
    Right,
    /// Lines are centred on the origin
    Center,
}

/// Vertical anchoring of a block relative to a reference rectangle, see
/// [`relative_to`](crate::layout::relative_to)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertAlign {
    #[default]
    Top,
    Bottom,
    Mid,
}

/// How glyph and rectangle edges are rasterized
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Hard, 8-connected edges
    #[default]
    Aliased,
    /// Anti-aliased edges
    Antialiased,
}

/// Which font a format draws with
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontChoice {
    /// The first font loaded into the [`FontBook`](crate::FontBook)
    #[default]
    Default,
    Id(Id<Font>),
}

impl From<Id<Font>> for FontChoice {
    fn from(id: Id<Font>) -> Self {
        FontChoice::Id(id)
    }
}

/// Debugging aids applied while a block is flushed
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DebugOptions {
    /// Draw a red marker at the block origin on every flush
    pub draw_origin: bool,
}

/// A complete set of formatting values. Every field has a default, see
/// [`FormatConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub colour: Colour,
    /// Stroke thickness of the glyphs, in pixels
    pub thickness: i32,
    pub font: FontChoice,
    /// Font scale factor; 1.0 is the font book's base size
    pub scale: f64,
    /// Multiplier applied to each line's height to get the distance to the next line
    pub line_spacing: f64,
    pub line_style: LineStyle,
    pub align: HorzAlign,
    /// When set, the origin is the lower-left corner of the first line instead
    /// of its upper-left corner
    pub bottom_left_origin: bool,
    /// Lay lines out bottom-to-top, last line first, growing upwards from the origin
    pub reverse: bool,
    /// Colour of the outline (or shadow) pass; no pass is drawn when unset
    pub outline_colour: Option<Colour>,
    pub outline_thickness: i32,
    /// Offset the outline pass down and to the right instead of drawing it
    /// around the glyphs
    pub shadow: bool,
    /// Colour of the plate drawn behind each line; no plate when unset
    pub background: Option<Colour>,
    /// Fill the plate rather than stroking its border
    pub background_filled: bool,
    /// Size the plate from the line's baseline rather than a fixed pad
    pub background_baseline_pad: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            colour: colours::BLACK,
            thickness: 2,
            font: FontChoice::Default,
            scale: 1.0,
            line_spacing: 1.1,
            line_style: LineStyle::Aliased,
            align: HorzAlign::Left,
            bottom_left_origin: false,
            reverse: false,
            outline_colour: None,
            outline_thickness: 4,
            shadow: false,
            background: None,
            background_filled: true,
            background_baseline_pad: true,
        }
    }
}

impl FormatConfig {
    /// Whether an outline (or shadow) pass is drawn for each line
    pub fn has_outline(&self) -> bool {
        self.outline_colour.is_some() && self.outline_thickness > 0
    }

    /// The widest stroke any pass of this format draws with. Outlines wrap the
    /// text stroke, so they add to it; shadows are offset copies and do not.
    pub fn combined_thickness(&self) -> i32 {
        if self.has_outline() && !self.shadow {
            self.outline_thickness + self.thickness
        } else {
            self.thickness
        }
    }

    /// How far the shadow pass is pushed down and right
    pub fn shadow_offset(&self) -> i32 {
        if self.shadow {
            self.outline_thickness
        } else {
            0
        }
    }

    /// What the measurement collaborator needs to size a line of this format
    pub fn font_spec(&self) -> FontSpec {
        FontSpec {
            font: self.font,
            scale: self.scale,
            thickness: self.combined_thickness(),
        }
    }

    /// Style of the primary glyph pass
    pub fn text_style(&self) -> GlyphStyle {
        GlyphStyle {
            font: self.font,
            scale: self.scale,
            colour: self.colour,
            thickness: self.thickness,
            line_style: self.line_style,
        }
    }

    /// Style of the outline or shadow pass, if this format has one
    pub fn outline_style(&self) -> Option<GlyphStyle> {
        let colour = self.outline_colour.filter(|_| self.has_outline())?;
        Some(GlyphStyle {
            colour,
            thickness: self.combined_thickness(),
            ..self.text_style()
        })
    }
}

/// A partial format: every field is either inherited (`None`) or explicitly
/// set. Formats can also carry text of their own, which is replayed every time
/// the format is applied to a block.
///
/// ```
/// use text_block::{colours, TextFormat};
///
/// let mut warning = TextFormat::outline().colour(colours::RED).scale(1.3);
/// warning.append("careful!\n");
/// assert_eq!(warning.resolve().outline_colour, Some(colours::BLACK));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextFormat {
    colour: Option<Colour>,
    thickness: Option<i32>,
    font: Option<FontChoice>,
    scale: Option<f64>,
    line_spacing: Option<f64>,
    line_style: Option<LineStyle>,
    align: Option<HorzAlign>,
    bottom_left_origin: Option<bool>,
    reverse: Option<bool>,
    outline_colour: Option<Option<Colour>>,
    outline_thickness: Option<i32>,
    shadow: Option<bool>,
    background: Option<Option<Colour>>,
    background_filled: Option<bool>,
    background_baseline_pad: Option<bool>,
    text: String,
}

fn pick<T: Clone>(into: &mut Option<T>, from: &Option<T>) {
    if let Some(v) = from {
        *into = Some(v.clone());
    }
}

impl TextFormat {
    /// A format that overrides nothing
    pub fn new() -> TextFormat {
        TextFormat::default()
    }

    /// Plain text: black, 2px, scale 1.0, 1.1 line spacing, and explicitly no
    /// outline, shadow or background
    pub fn plain() -> TextFormat {
        TextFormat::new()
            .colour(colours::BLACK)
            .thickness(2)
            .scale(1.0)
            .line_spacing(1.1)
            .no_outline()
            .shadow(false)
            .no_background()
    }

    /// White text with a 4px black outline
    pub fn outline() -> TextFormat {
        TextFormat::new()
            .colour(colours::WHITE)
            .thickness(2)
            .scale(1.0)
            .line_spacing(1.1)
            .outline_colour(colours::BLACK)
            .outline_thickness(4)
            .shadow(false)
            .no_background()
    }

    /// White text with a black drop shadow offset by 2px
    pub fn shadow_text() -> TextFormat {
        TextFormat::new()
            .colour(colours::WHITE)
            .thickness(2)
            .scale(1.0)
            .line_spacing(1.1)
            .outline_colour(colours::BLACK)
            .outline_thickness(2)
            .shadow(true)
            .no_background()
    }

    /// Black text on a filled white plate padded by the line's baseline
    pub fn background() -> TextFormat {
        TextFormat::new()
            .colour(colours::BLACK)
            .thickness(2)
            .scale(1.0)
            .line_spacing(1.1)
            .no_outline()
            .outline_thickness(0)
            .shadow(false)
            .background_colour(colours::WHITE)
            .background_filled(true)
            .background_baseline_pad(true)
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn font<F: Into<FontChoice>>(mut self, font: F) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    pub fn line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }

    pub fn align(mut self, align: HorzAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn bottom_left_origin(mut self, bottom_left_origin: bool) -> Self {
        self.bottom_left_origin = Some(bottom_left_origin);
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    pub fn outline_colour(mut self, colour: Colour) -> Self {
        self.outline_colour = Some(Some(colour));
        self
    }

    /// Explicitly turn the outline pass off, overriding an inherited outline
    pub fn no_outline(mut self) -> Self {
        self.outline_colour = Some(None);
        self
    }

    pub fn outline_thickness(mut self, thickness: i32) -> Self {
        self.outline_thickness = Some(thickness);
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn background_colour(mut self, colour: Colour) -> Self {
        self.background = Some(Some(colour));
        self
    }

    /// Explicitly turn the background plate off
    pub fn no_background(mut self) -> Self {
        self.background = Some(None);
        self
    }

    pub fn background_filled(mut self, filled: bool) -> Self {
        self.background_filled = Some(filled);
        self
    }

    pub fn background_baseline_pad(mut self, baseline_pad: bool) -> Self {
        self.background_baseline_pad = Some(baseline_pad);
        self
    }

    /// Store text with this format
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Builder form of [`TextFormat::append`]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    /// Text stored with this format
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Layer the explicitly set fields of `other` on top of this format.
    /// Fields that `other` leaves inherited are untouched. Stored text is not merged.
    pub fn merge(&mut self, other: &TextFormat) {
        pick(&mut self.colour, &other.colour);
        pick(&mut self.thickness, &other.thickness);
        pick(&mut self.font, &other.font);
        pick(&mut self.scale, &other.scale);
        pick(&mut self.line_spacing, &other.line_spacing);
        pick(&mut self.line_style, &other.line_style);
        pick(&mut self.align, &other.align);
        pick(&mut self.bottom_left_origin, &other.bottom_left_origin);
        pick(&mut self.reverse, &other.reverse);
        pick(&mut self.outline_colour, &other.outline_colour);
        pick(&mut self.outline_thickness, &other.outline_thickness);
        pick(&mut self.shadow, &other.shadow);
        pick(&mut self.background, &other.background);
        pick(&mut self.background_filled, &other.background_filled);
        pick(&mut self.background_baseline_pad, &other.background_baseline_pad);
    }

    /// Fill every inherited field with its default
    pub fn resolve(&self) -> FormatConfig {
        let d = FormatConfig::default();
        FormatConfig {
            colour: self.colour.unwrap_or(d.colour),
            thickness: self.thickness.unwrap_or(d.thickness),
            font: self.font.unwrap_or(d.font),
            scale: self.scale.unwrap_or(d.scale),
            line_spacing: self.line_spacing.unwrap_or(d.line_spacing),
            line_style: self.line_style.unwrap_or(d.line_style),
            align: self.align.unwrap_or(d.align),
            bottom_left_origin: self.bottom_left_origin.unwrap_or(d.bottom_left_origin),
            reverse: self.reverse.unwrap_or(d.reverse),
            outline_colour: self.outline_colour.unwrap_or(d.outline_colour),
            outline_thickness: self.outline_thickness.unwrap_or(d.outline_thickness),
            shadow: self.shadow.unwrap_or(d.shadow),
            background: self.background.unwrap_or(d.background),
            background_filled: self.background_filled.unwrap_or(d.background_filled),
            background_baseline_pad: self
                .background_baseline_pad
                .unwrap_or(d.background_baseline_pad),
        }
    }
}

impl From<&FormatConfig> for TextFormat {
    fn from(c: &FormatConfig) -> Self {
        TextFormat {
            colour: Some(c.colour),
            thickness: Some(c.thickness),
            font: Some(c.font),
            scale: Some(c.scale),
            line_spacing: Some(c.line_spacing),
            line_style: Some(c.line_style),
            align: Some(c.align),
            bottom_left_origin: Some(c.bottom_left_origin),
            reverse: Some(c.reverse),
            outline_colour: Some(c.outline_colour),
            outline_thickness: Some(c.outline_thickness),
            shadow: Some(c.shadow),
            background: Some(c.background),
            background_filled: Some(c.background_filled),
            background_baseline_pad: Some(c.background_baseline_pad),
            text: String::new(),
        }
    }
}

impl fmt::Write for TextFormat {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}
