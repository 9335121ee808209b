mod circle;
pub(crate) mod point;
mod rectangle;
mod shape;
mod triangle;

pub use circle::*;
pub use point::Point;
pub use rectangle::*;
pub use shape::*;
pub use triangle::*;
