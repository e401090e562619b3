pub mod buffer;
pub mod config;
pub mod entries;
pub mod hit;
pub mod layout;
pub mod node;
pub mod paint;
pub mod state;
pub mod terminal;
pub mod text;
pub mod types;
pub mod view;

pub use buffer::{Buffer, Cell};
pub use config::{Config, Direction, GroupOps};
pub use entries::{set_all, toggle_entry, Entry};
pub use hit::hit;
pub use layout::{child_areas, measure, Rect};
pub use node::Node;
pub use paint::paint;
pub use state::DropdownState;
pub use terminal::Terminal;
pub use types::{Border, Color, ColorOp, Palette, Rgb, Style, TextStyle};
pub use view::{view, CHECK_ALL_LABEL, UNCHECK_ALL_LABEL};
