mod color;
mod palette;
mod style;

pub use color::{Color, ColorOp, Rgb};
pub use self::palette::Palette;
pub use style::{Border, Style, TextStyle};
