#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use text_block::{
    Colour, DrawTarget, FontSpec, GlyphStyle, LineMetrics, LineStyle, MeasureText, Point,
    RectStroke, Result, TextError,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every glyph is 10px wide; lines are 20px tall with a 6px baseline, so a
/// line advances round(1.1 * 26) = 29px at the default spacing
#[derive(Default)]
pub struct Monospace {
    pub measured: RefCell<Vec<(String, FontSpec)>>,
}

impl Monospace {
    pub fn calls(&self) -> usize {
        self.measured.borrow().len()
    }
}

impl MeasureText for Monospace {
    fn measure_line(&self, text: &str, spec: &FontSpec) -> Result<LineMetrics> {
        self.measured.borrow_mut().push((text.to_string(), *spec));
        Ok(LineMetrics {
            width: 10 * text.chars().count() as i32,
            height: 20,
            baseline: 6,
        })
    }
}

/// Fails every measurement after the first `ok` ones
pub struct Flaky {
    pub ok: Cell<usize>,
}

impl MeasureText for Flaky {
    fn measure_line(&self, text: &str, spec: &FontSpec) -> Result<LineMetrics> {
        match self.ok.get() {
            0 => Err(TextError::NoFonts),
            n => {
                self.ok.set(n - 1);
                Monospace::default().measure_line(text, spec)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Line {
        text: String,
        origin: Point,
        style: GlyphStyle,
    },
    Rectangle {
        corner1: Point,
        corner2: Point,
        colour: Colour,
        stroke: RectStroke,
        line_style: LineStyle,
    },
    Marker {
        at: Point,
        colour: Colour,
    },
}

/// Records every draw call it is given
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<(&str, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Line { text, origin, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect()
    }
}

impl DrawTarget for Recorder {
    fn draw_line(&mut self, text: &str, origin: Point, style: &GlyphStyle) -> Result<()> {
        self.calls.push(Call::Line {
            text: text.to_string(),
            origin,
            style: *style,
        });
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        corner1: Point,
        corner2: Point,
        colour: Colour,
        stroke: RectStroke,
        line_style: LineStyle,
    ) -> Result<()> {
        self.calls.push(Call::Rectangle {
            corner1,
            corner2,
            colour,
            stroke,
            line_style,
        });
        Ok(())
    }

    fn draw_marker(&mut self, at: Point, colour: Colour) -> Result<()> {
        self.calls.push(Call::Marker { at, colour });
        Ok(())
    }
}
