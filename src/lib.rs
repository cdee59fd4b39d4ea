//! placard - bordered panels and modal menus for line-oriented terminals
//!
//! Styled text runs, box-drawn panels that stack items vertically, and a
//! blocking single-selection loop over a pluggable console driver. The
//! demo binary is in `main.rs`.

pub mod border;
pub mod console;
pub mod error;
pub mod item;
pub mod panel;
pub mod select;
pub mod spacing;
pub mod testing;
pub mod text;
pub mod theme;
pub mod widgets;

pub use border::Border;
pub use console::{AnsiConsole, Console, Key};
pub use error::{Error, Result};
pub use item::{Item, Selectable, Widget};
pub use panel::Panel;
pub use select::{show, show_with, StopSignal};
pub use spacing::{Alignment, Edge, Sides};
pub use text::{Run, StyledText};
pub use theme::Theme;
