use crate::error::Result;
use crate::format::{DebugOptions, TextFormat};
use crate::layout::{layout_block, BlockLayout, Placement};
use crate::rect::Rect;
use crate::render::{dispatch, DrawTarget, MeasureText};
use crate::units::{Point, Size};
use std::fmt;

/// What a [`TextBlock`] has laid out so far
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BlockMetrics {
    /// Width of the widest line of the last flush, and the running cursor
    /// offset (negative for blocks that grow upwards)
    pub text_size: Size,
    /// `(width, advance)` of every line of every flush, in draw order. Empty
    /// lines have a width of 0.
    pub line_sizes: Vec<Size>,
    /// Bounding box of the block so far, as of the last flush
    pub textbox: Rect,
    pub origin: Point,
}

/// Accumulates multi-line text and draws it when the format changes or the
/// block goes out of scope.
///
/// Text is buffered by [`append`](TextBlock::append) (or `write!`). Applying a
/// new [`TextFormat`] first draws everything buffered so far with the old
/// format, so formats can be switched mid-stream without disturbing what
/// came before. Whatever is still buffered is drawn on drop; use
/// [`finish`](TextBlock::finish) instead to see errors and collect metrics.
///
/// ```
/// use std::fmt::Write;
/// use text_block::{colours, BlockMetrics, FontSpec, LineMetrics, MeasureText, Point, TextBlock, TextFormat};
///
/// struct Fixed;
/// impl MeasureText for Fixed {
///     fn measure_line(&self, text: &str, _: &FontSpec) -> text_block::Result<LineMetrics> {
///         Ok(LineMetrics { width: 8 * text.len() as i32, height: 12, baseline: 4 })
///     }
/// }
///
/// let mut block = TextBlock::unbound(&Fixed, Point::new(40, 40));
/// writeln!(block, "pi is roughly {:.2}", std::f64::consts::PI).unwrap();
/// block.apply(&TextFormat::new().colour(colours::RED)).unwrap();
/// block.append("and this line is red");
/// let metrics: BlockMetrics = block.finish().unwrap();
/// assert_eq!(metrics.line_sizes.len(), 3);
/// ```
pub struct TextBlock<'a> {
    measurer: &'a dyn MeasureText,
    target: Option<&'a mut dyn DrawTarget>,
    origin: Point,
    format: TextFormat,
    buffer: String,
    cursor: i32,
    debug: DebugOptions,
    metrics: BlockMetrics,
    report: Option<&'a mut BlockMetrics>,
}

impl<'a> TextBlock<'a> {
    /// Start a block at `origin` on `target`, with the default format
    pub fn new(
        measurer: &'a dyn MeasureText,
        target: &'a mut dyn DrawTarget,
        origin: Point,
    ) -> TextBlock<'a> {
        TextBlock::with_format(measurer, Some(target), origin, TextFormat::new())
    }

    /// A block with nothing to draw on. It still lays text out and reports
    /// metrics.
    pub fn unbound(measurer: &'a dyn MeasureText, origin: Point) -> TextBlock<'a> {
        TextBlock::with_format(measurer, None, origin, TextFormat::new())
    }

    /// Start a block with an initial format. Text stored in the format is
    /// buffered straight away.
    pub fn with_format(
        measurer: &'a dyn MeasureText,
        target: Option<&'a mut dyn DrawTarget>,
        origin: Point,
        format: TextFormat,
    ) -> TextBlock<'a> {
        let buffer = format.text().to_string();
        TextBlock {
            measurer,
            target,
            origin,
            format,
            buffer,
            cursor: 0,
            debug: DebugOptions::default(),
            metrics: BlockMetrics::default(),
            report: None,
        }
    }

    /// Start a block pinned to a rectangle, see [`relative_to`](crate::layout::relative_to)
    pub fn anchored(
        measurer: &'a dyn MeasureText,
        target: &'a mut dyn DrawTarget,
        placement: Placement,
    ) -> TextBlock<'a> {
        TextBlock::with_format(measurer, Some(target), placement.origin, placement.format)
    }

    pub fn set_debug(&mut self, debug: DebugOptions) -> &mut Self {
        self.debug = debug;
        self
    }

    /// Copy the block's metrics into `slot` after every flush, including the
    /// one that happens on drop
    pub fn report_to(&mut self, slot: &'a mut BlockMetrics) -> &mut Self {
        self.report = Some(slot);
        self
    }

    /// Buffer more text. Newlines start new lines.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Buffer a line break
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Draw what is buffered with the current format, then layer `format`'s
    /// explicit fields on top and buffer any text it carries
    pub fn apply(&mut self, format: &TextFormat) -> Result<&mut Self> {
        self.flush()?;
        self.format.merge(format);
        self.buffer.push_str(format.text());
        Ok(self)
    }

    /// Lay out and draw everything buffered. Does nothing when the buffer is
    /// empty. The cursor carries on from where the previous flush left it.
    pub fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.buffer);
        let config = self.format.resolve();

        let Some(layout) = layout_block(
            &text,
            &config,
            self.origin,
            self.cursor,
            self.debug,
            self.measurer,
        )?
        else {
            return Ok(());
        };

        self.cursor = layout.cursor;
        self.record(&layout);

        match self.target.as_deref_mut() {
            Some(target) => dispatch(&layout.ops, target),
            None => {
                log::trace!("unbound block at {}, skipping {} draw(s)", self.origin, layout.ops.len());
                Ok(())
            }
        }
    }

    fn record(&mut self, layout: &BlockLayout) {
        self.metrics.text_size = layout.text_size;
        self.metrics
            .line_sizes
            .extend(layout.lines.iter().map(|line| line.size()));
        self.metrics.textbox = layout.textbox;
        self.metrics.origin = layout.origin;
        if let Some(slot) = self.report.as_deref_mut() {
            slot.clone_from(&self.metrics);
        }
    }

    /// Flush whatever is left and hand back the block's metrics
    pub fn finish(mut self) -> Result<BlockMetrics> {
        self.flush()?;
        Ok(std::mem::take(&mut self.metrics))
    }

    pub fn metrics(&self) -> &BlockMetrics {
        &self.metrics
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Vertical offset of the next line from the origin
    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Text buffered but not drawn yet
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }
}

impl fmt::Write for TextBlock<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Drop for TextBlock<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            log::error!("failed to draw text block at {}: {e}", self.origin);
        }
    }
}

impl fmt::Debug for TextBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBlock")
            .field("origin", &self.origin)
            .field("bound", &self.is_bound())
            .field("format", &self.format)
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .finish()
    }
}
