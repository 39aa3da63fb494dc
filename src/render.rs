//! The contracts between the layout engine and the thing that actually puts
//! pixels on an image.
//!
//! The engine never rasterizes anything itself. It asks a [`MeasureText`] how
//! big each line is, plans a list of [`DrawOp`]s, and hands them to a
//! [`DrawTarget`] in z-order. [`FontBook`](crate::FontBook) and
//! [`Raster`](crate::Raster) are the implementations that ship with the crate.

use crate::colour::Colour;
use crate::error::Result;
use crate::format::{FontChoice, LineStyle};
use crate::units::Point;

/// Everything needed to size a line of text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontSpec {
    pub font: FontChoice,
    pub scale: f64,
    /// Stroke width the line will be drawn with, in pixels
    pub thickness: i32,
}

/// Everything needed to draw a line of text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphStyle {
    pub font: FontChoice,
    pub scale: f64,
    pub colour: Colour,
    pub thickness: i32,
    pub line_style: LineStyle,
}

/// Footprint of a single line of text, in pixels
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LineMetrics {
    pub width: i32,
    /// Distance from the baseline up to the top of the tallest glyphs,
    /// not counting descenders
    pub height: i32,
    /// Distance from the baseline down to the bottom of descenders ('g', 'y')
    pub baseline: i32,
}

/// Whether a rectangle is filled or outlined
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RectStroke {
    Filled,
    /// Outlined with the given line width, in pixels
    Outline(i32),
}

/// Sizes single lines of text. Lines never contain newlines.
pub trait MeasureText {
    fn measure_line(&self, text: &str, spec: &FontSpec) -> Result<LineMetrics>;
}

/// A surface that single lines of text and rectangles can be drawn onto
pub trait DrawTarget {
    /// Draw one line of text with its baseline-left point at `origin`
    fn draw_line(&mut self, text: &str, origin: Point, style: &GlyphStyle) -> Result<()>;

    fn draw_rectangle(
        &mut self,
        corner1: Point,
        corner2: Point,
        colour: Colour,
        stroke: RectStroke,
        line_style: LineStyle,
    ) -> Result<()>;

    /// Mark a point, for debugging placement
    fn draw_marker(&mut self, at: Point, colour: Colour) -> Result<()>;
}

/// Which pass of a line a text draw belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextPass {
    /// The outline or shadow drawn underneath the glyphs
    Outline,
    /// The glyphs themselves
    Primary,
}

/// A single planned draw call, in absolute image coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Marker {
        at: Point,
        colour: Colour,
    },
    Rectangle {
        corner1: Point,
        corner2: Point,
        colour: Colour,
        stroke: RectStroke,
        line_style: LineStyle,
    },
    Text {
        text: String,
        origin: Point,
        style: GlyphStyle,
        pass: TextPass,
    },
}

impl DrawOp {
    /// Issue this draw call against `target`
    pub fn draw(&self, target: &mut dyn DrawTarget) -> Result<()> {
        match self {
            DrawOp::Marker { at, colour } => target.draw_marker(*at, *colour),
            DrawOp::Rectangle {
                corner1,
                corner2,
                colour,
                stroke,
                line_style,
            } => target.draw_rectangle(*corner1, *corner2, *colour, *stroke, *line_style),
            DrawOp::Text {
                text, origin, style, ..
            } => target.draw_line(text, *origin, style),
        }
    }
}

/// Issue every op in order, stopping at the first failure
pub fn dispatch(ops: &[DrawOp], target: &mut dyn DrawTarget) -> Result<()> {
    for op in ops {
        op.draw(target)?;
    }
    Ok(())
}
