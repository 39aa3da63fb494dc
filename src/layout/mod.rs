//! The line-layout and placement engine.
//!
//! [`layout_block`](crate::layout::layout_block) turns a buffered block of text
//! and a [`FormatConfig`](crate::FormatConfig) into per-line placements and a
//! z-ordered list of draw calls. It is what a [`TextBlock`](crate::TextBlock)
//! runs every time it flushes, and can be used on its own to measure text
//! without drawing it.
//!
//! [`relative_to`](crate::layout::relative_to) and
//! [`beside`](crate::layout::beside) compute an origin and origin semantics
//! that pin a block to an edge or corner of a reference rectangle.
//!
//! # Example
//!
//! ```no_run
//! use text_block::{colours, FontBook, HorzAlign, Raster, Rect, TextBlock, VertAlign};
//! use text_block::layout::relative_to;
//!
//! let mut fonts = FontBook::default();
//! fonts.load_file("assets/DejaVuSans.ttf").expect("can load font");
//!
//! let mut raster = Raster::new(800, 800, &fonts).expect("can allocate canvas");
//! raster.fill(colours::WHITE);
//!
//! let frame = Rect::new(150, 150, 500, 500);
//! let label = relative_to(frame, VertAlign::Top, HorzAlign::Left, false, 6);
//! {
//!     let mut block = TextBlock::anchored(&fonts, &mut raster, label);
//!     block.append("above the frame\nbottom line touches the pad");
//! }
//! raster.save("anchored.png").expect("can save image");
//! ```

mod anchor;
mod lines;

pub use anchor::*;
pub use lines::*;
