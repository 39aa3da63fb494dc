mod block;
pub use block::*;

mod colour;
pub use colour::*;

mod font;
pub use font::*;

mod format;
pub use format::*;

/// Line layout and placement of text blocks relative to rectangles
pub mod layout;

mod raster;
pub use raster::*;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export the font id type, for picking fonts out of a [FontBook]
pub use id_arena::Id;
