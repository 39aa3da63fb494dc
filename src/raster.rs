//! A [`DrawTarget`] that rasterizes onto an in-memory RGBA canvas with
//! tiny-skia, using glyph outlines from a [`FontBook`].

use crate::colour::Colour;
use crate::error::{Result, TextError};
use crate::font::{FontBook, PX_PER_SCALE};
use crate::format::LineStyle;
use crate::rect::Rect;
use crate::render::{DrawTarget, GlyphStyle, RectStroke};
use crate::units::Point;
use image::RgbaImage;
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder};
use std::path::Path;
use tiny_skia::{
    ColorU8, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

/// Arm length of debug markers, in pixels
const MARKER_SIZE: i32 = 10;

/// An RGBA canvas that text blocks draw onto
pub struct Raster<'f> {
    pixmap: Pixmap,
    fonts: &'f FontBook,
}

impl<'f> Raster<'f> {
    /// A transparent canvas
    pub fn new(width: u32, height: u32, fonts: &'f FontBook) -> Result<Raster<'f>> {
        let pixmap = Pixmap::new(width, height).ok_or(TextError::InvalidCanvasSize { width, height })?;
        Ok(Raster { pixmap, fonts })
    }

    /// A canvas initialised with the contents of `image`
    pub fn from_image(image: &RgbaImage, fonts: &'f FontBook) -> Result<Raster<'f>> {
        let mut raster = Raster::new(image.width(), image.height(), fonts)?;
        for (dst, src) in raster.pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(raster)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Paint the whole canvas
    pub fn fill(&mut self, colour: Colour) {
        self.pixmap.fill(colour.into());
    }

    /// The colour of a single pixel, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<image::Rgba<u8>> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]))
    }

    /// Copy the canvas out as straight-alpha RGBA
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width(), self.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    /// Encode the canvas to disk; the format is picked from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        log::info!("wrote {}x{} image to {}", self.width(), self.height(), path.display());
        Ok(())
    }
}

fn paint(colour: Colour, line_style: LineStyle) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(colour.into());
    paint.anti_alias = line_style == LineStyle::Antialiased;
    paint
}

fn stroke(width: i32) -> Stroke {
    Stroke {
        width: width as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Collects glyph outlines, flipping font units (y up) into canvas pixels (y down)
struct GlyphPath {
    builder: PathBuilder,
    scaling: f32,
    pen: (f32, f32),
}

impl GlyphPath {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.pen.0 + x * self.scaling, self.pen.1 - y * self.scaling)
    }
}

impl OutlineBuilder for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

impl DrawTarget for Raster<'_> {
    fn draw_line(&mut self, text: &str, origin: Point, style: &GlyphStyle) -> Result<()> {
        let font = self.fonts.get(style.font)?;
        let size = style.scale as f32 * PX_PER_SCALE;

        let mut glyphs = GlyphPath {
            builder: PathBuilder::new(),
            scaling: font.scaling(size),
            pen: (origin.x as f32, origin.y as f32),
        };
        for ch in text.chars() {
            let Some(gid) = font.glyph_or_replacement(ch) else {
                continue;
            };
            font.face.as_face_ref().outline_glyph(GlyphId(gid), &mut glyphs);
            glyphs.pen.0 += font.advance(gid, size);
        }

        // nothing but whitespace
        let Some(path) = glyphs.builder.finish() else {
            return Ok(());
        };

        let paint = paint(style.colour, style.line_style);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        if style.thickness > 0 {
            self.pixmap.stroke_path(
                &path,
                &paint,
                &stroke(style.thickness),
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        corner1: Point,
        corner2: Point,
        colour: Colour,
        rect_stroke: RectStroke,
        line_style: LineStyle,
    ) -> Result<()> {
        let Some(rect): Option<tiny_skia::Rect> = Rect::from_corners(corner1, corner2).into() else {
            log::trace!("skipping degenerate rectangle {corner1} {corner2}");
            return Ok(());
        };
        let paint = paint(colour, line_style);
        match rect_stroke {
            RectStroke::Filled => {
                self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
            RectStroke::Outline(width) => {
                let path = PathBuilder::from_rect(rect);
                self.pixmap
                    .stroke_path(&path, &paint, &stroke(width), Transform::identity(), None);
            }
        }
        Ok(())
    }

    fn draw_marker(&mut self, at: Point, colour: Colour) -> Result<()> {
        // centre the one pixel wide arms on the pixel
        let (x, y) = (at.x as f32 + 0.5, at.y as f32 + 0.5);
        let arm = MARKER_SIZE as f32;
        let mut pb = PathBuilder::new();
        pb.move_to(x - arm, y);
        pb.line_to(x + arm, y);
        pb.move_to(x, y - arm);
        pb.line_to(x, y + arm);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(colour, LineStyle::Aliased),
                &stroke(1),
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::format::FontChoice;

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let fonts = FontBook::default();
        assert!(matches!(
            Raster::new(0, 10, &fonts),
            Err(TextError::InvalidCanvasSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn filled_rectangles_cover_their_corners() {
        let fonts = FontBook::default();
        let mut raster = Raster::new(20, 20, &fonts).unwrap();
        raster.fill(colours::WHITE);
        raster
            .draw_rectangle(
                Point::new(15, 15),
                Point::new(5, 5),
                colours::RED,
                RectStroke::Filled,
                LineStyle::Aliased,
            )
            .unwrap();
        assert_eq!(raster.pixel(10, 10), Some(image::Rgba([255, 0, 0, 255])));
        assert_eq!(raster.pixel(2, 2), Some(image::Rgba([255, 255, 255, 255])));
        assert_eq!(raster.pixel(40, 40), None);
    }

    #[test]
    fn outlined_rectangles_leave_the_middle_alone() {
        let fonts = FontBook::default();
        let mut raster = Raster::new(40, 40, &fonts).unwrap();
        raster.fill(colours::WHITE);
        raster
            .draw_rectangle(
                Point::new(5, 5),
                Point::new(35, 35),
                colours::BLUE,
                RectStroke::Outline(2),
                LineStyle::Aliased,
            )
            .unwrap();
        assert_eq!(raster.pixel(20, 20), Some(image::Rgba([255, 255, 255, 255])));
        assert_eq!(raster.pixel(5, 20), Some(image::Rgba([0, 0, 255, 255])));
    }

    #[test]
    fn markers_cross_at_the_point() {
        let fonts = FontBook::default();
        let mut raster = Raster::new(30, 30, &fonts).unwrap();
        raster.fill(colours::WHITE);
        raster.draw_marker(Point::new(15, 15), colours::RED).unwrap();
        let image = raster.to_image();
        assert_eq!(image.get_pixel(15, 8).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(3, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn image_round_trip_keeps_pixels() {
        let fonts = FontBook::default();
        let mut image = RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 1, image::Rgba([200, 100, 0, 255]));
        let raster = Raster::from_image(&image, &fonts).unwrap();
        assert_eq!(raster.to_image(), image);
    }

    fn painted(raster: &Raster) -> Vec<(u32, u32)> {
        raster
            .to_image()
            .enumerate_pixels()
            .filter(|(_, _, px)| px.0 != [255, 255, 255, 255])
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn glyphs_are_painted_around_the_baseline() {
        let mut fonts = FontBook::default();
        fonts.add_font(
            crate::font::Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec())
                .expect("can load font"),
        );
        let mut raster = Raster::new(80, 60, &fonts).unwrap();
        raster.fill(colours::WHITE);
        let style = GlyphStyle {
            font: FontChoice::Default,
            scale: 1.0,
            colour: colours::BLACK,
            thickness: 2,
            line_style: LineStyle::Aliased,
        };
        raster.draw_line("Hg", Point::new(10, 40), &style).unwrap();

        let pixels = painted(&raster);
        assert!(pixels.len() > 100, "only {} pixels painted", pixels.len());
        // "Hg" measures 46x31 above and 9 below the baseline at this stroke
        for &(x, y) in &pixels {
            assert!((9..=10 + 46).contains(&x), "stray pixel at ({x}, {y})");
            assert!((40 - 31..=40 + 9).contains(&y), "stray pixel at ({x}, {y})");
        }
        // the stem of the H crosses the baseline's left end
        assert!(pixels.iter().any(|&(x, y)| x < 20 && y == 30));
        assert!(pixels.iter().any(|&(_, y)| y > 40));
    }

    #[test]
    fn whitespace_paints_nothing() {
        let mut fonts = FontBook::default();
        fonts.add_font(
            crate::font::Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec())
                .expect("can load font"),
        );
        let mut raster = Raster::new(40, 40, &fonts).unwrap();
        raster.fill(colours::WHITE);
        let style = GlyphStyle {
            font: FontChoice::Default,
            scale: 1.0,
            colour: colours::BLACK,
            thickness: 2,
            line_style: LineStyle::Antialiased,
        };
        raster.draw_line("  ", Point::new(5, 30), &style).unwrap();
        assert!(painted(&raster).is_empty());
    }

    #[test]
    fn drawing_text_needs_a_font() {
        let fonts = FontBook::default();
        let mut raster = Raster::new(10, 10, &fonts).unwrap();
        let style = GlyphStyle {
            font: FontChoice::Default,
            scale: 1.0,
            colour: colours::BLACK,
            thickness: 1,
            line_style: LineStyle::Aliased,
        };
        assert!(matches!(
            raster.draw_line("hi", Point::new(0, 9), &style),
            Err(TextError::NoFonts)
        ));
    }
}
