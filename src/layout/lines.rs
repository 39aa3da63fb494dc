use crate::colour::colours;
use crate::error::Result;
use crate::format::{DebugOptions, FormatConfig, HorzAlign, LineStyle};
use crate::rect::Rect;
use crate::render::{DrawOp, LineMetrics, MeasureText, RectStroke, TextPass};
use crate::units::{round_px, Point, Size};

/// Tabs are expanded to this many spaces before a line is measured
const TABSIZE: usize = 2;

/// Horizontal padding of background plates, and their vertical padding when
/// they are not sized from the baseline. Scaled with the font.
const BACKGROUND_PAD: i32 = 6;

/// Stroke width of background plates that are outlined rather than filled
const BACKGROUND_BORDER: i32 = 2;

/// Placement of a single laid out line
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// The line as drawn, with tabs expanded
    pub text: String,
    pub metrics: LineMetrics,
    /// Measured width, or 0 for an empty line
    pub width: i32,
    /// Signed distance from this line's cursor to the next line's
    pub advance: i32,
    /// Vertical cursor offset of this line, relative to the block origin
    pub cursor: i32,
    /// Baseline-left point the primary pass is drawn at, in image coordinates
    pub origin: Point,
}

impl LineLayout {
    /// `(width, advance)` as reported in
    /// [`BlockMetrics::line_sizes`](crate::BlockMetrics::line_sizes)
    pub fn size(&self) -> Size {
        Size::new(self.width, self.advance)
    }
}

/// The result of laying out one flushed segment of a block
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub lines: Vec<LineLayout>,
    /// Draw calls in z-order: marker, then per line plate, outline, glyphs
    pub ops: Vec<DrawOp>,
    /// Cursor offset after the last line
    pub cursor: i32,
    /// Widest line, and the final cursor offset
    pub text_size: Size,
    /// Bounding box of everything laid out from the origin so far
    pub textbox: Rect,
    pub origin: Point,
}

/// Lay out `text` at `origin`, continuing from a vertical `cursor` offset left
/// by earlier segments of the same block.
///
/// The text is split on `\n` exactly, so a trailing newline produces a final
/// empty line that still advances the cursor. Returns `None` without calling
/// the measurer when `text` is empty.
pub fn layout_block(
    text: &str,
    config: &FormatConfig,
    origin: Point,
    cursor: i32,
    debug: DebugOptions,
    measurer: &dyn MeasureText,
) -> Result<Option<BlockLayout>> {
    if text.is_empty() {
        return Ok(None);
    }

    let one_line = !text.contains('\n');
    let mut raw_lines: Vec<&str> = text.split('\n').collect();
    if config.reverse {
        raw_lines.reverse();
    }

    // single centred lines straddle the origin vertically
    let midline_k = match (one_line && config.align == HorzAlign::Center, config.bottom_left_origin) {
        (false, _) => 0,
        (true, true) => 1,
        (true, false) => -1,
    };
    let direction = if config.reverse { -1 } else { 1 };
    let spec = config.font_spec();
    let tab = " ".repeat(TABSIZE);

    log::debug!(
        "laying out {} line(s) at {origin}, cursor {cursor}, align {:?}, reverse {}",
        raw_lines.len(),
        config.align,
        config.reverse
    );

    let mut ops: Vec<DrawOp> = Vec::with_capacity(raw_lines.len() * 2 + 1);
    if debug.draw_origin {
        ops.push(DrawOp::Marker {
            at: origin,
            colour: colours::RED,
        });
    }

    let mut lines: Vec<LineLayout> = Vec::with_capacity(raw_lines.len());
    let mut cursor = cursor;
    let mut max_width = 0;

    for raw in raw_lines {
        let text = raw.replace('\t', &tab);
        let metrics = measurer.measure_line(&text, &spec)?;

        let width = if text.is_empty() { 0 } else { metrics.width };
        let line_height = metrics.height + metrics.baseline;
        // the host draws from the baseline; shift down so the origin is the top
        let origin_adjust = if config.bottom_left_origin {
            0
        } else {
            metrics.height
        };
        let midline_adjust = midline_k * metrics.height / 2;
        let advance = round_px(config.line_spacing * line_height as f64) * direction;
        let shift = match config.align {
            HorzAlign::Left => 0,
            HorzAlign::Center => -width / 2,
            HorzAlign::Right => -width,
        };
        max_width = max_width.max(width);

        let text_y = cursor + origin_adjust + midline_adjust;
        let line_origin = origin.offset(shift, text_y);

        if !text.is_empty() {
            if let Some(colour) = config.background {
                ops.push(background_plate(
                    config,
                    &metrics,
                    width,
                    origin.offset(shift, cursor + midline_adjust),
                    one_line,
                    colour,
                ));
            }

            if let Some(style) = config.outline_style() {
                let offset = config.shadow_offset();
                ops.push(DrawOp::Text {
                    text: text.clone(),
                    origin: line_origin.offset(offset, offset),
                    style,
                    pass: TextPass::Outline,
                });
            }

            ops.push(DrawOp::Text {
                text: text.clone(),
                origin: line_origin,
                style: config.text_style(),
                pass: TextPass::Primary,
            });
        }

        log::trace!("line {text:?}: {width}px wide, advance {advance}, drawn at {line_origin}");

        lines.push(LineLayout {
            text,
            metrics,
            width,
            advance,
            cursor,
            origin: line_origin,
        });
        cursor += advance;
    }

    let (x1, x2) = match config.align {
        HorzAlign::Left => (origin.x, origin.x + max_width),
        HorzAlign::Center => (origin.x - max_width / 2, origin.x + max_width / 2),
        HorzAlign::Right => (origin.x - max_width, origin.x),
    };
    let midline_adjust = midline_k * cursor / 2;
    let textbox = Rect::from_corners(
        Point::new(x1, origin.y + midline_adjust),
        Point::new(x2, origin.y + midline_adjust + cursor),
    );

    Ok(Some(BlockLayout {
        lines,
        ops,
        cursor,
        text_size: Size::new(max_width, cursor),
        textbox,
        origin,
    }))
}

/// The plate behind one line. `top_left` is where the line's top edge meets
/// its aligned left edge.
fn background_plate(
    config: &FormatConfig,
    metrics: &LineMetrics,
    width: i32,
    top_left: Point,
    one_line: bool,
    colour: crate::colour::Colour,
) -> DrawOp {
    let with_scale = |v: i32| round_px(config.scale * v as f64);
    let with_space = |v: i32| round_px(config.line_spacing * v as f64);

    let line_height = metrics.height + metrics.baseline;
    let (top, bottom) = match (config.background_baseline_pad, one_line) {
        (true, true) => (metrics.baseline / 2, line_height),
        (true, false) => (with_space(metrics.baseline / 2), with_space(line_height)),
        (false, _) => (
            with_scale(BACKGROUND_PAD),
            metrics.height + with_scale(BACKGROUND_PAD),
        ),
    };
    let rev = if config.reverse { -1 } else { 1 };
    let pad = with_scale(BACKGROUND_PAD);

    DrawOp::Rectangle {
        corner1: top_left.offset(-pad, -top * rev),
        corner2: top_left.offset(width + pad, bottom * rev),
        colour,
        stroke: if config.background_filled {
            RectStroke::Filled
        } else {
            RectStroke::Outline(BACKGROUND_BORDER)
        },
        line_style: LineStyle::Antialiased,
    }
}
