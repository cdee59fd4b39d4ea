//! The contract between panels and the things placed on them.

use crate::error::Result;
use crate::spacing::Sides;
use crate::text::StyledText;

/// Anything a panel can lay out: reserved spacing plus a pure render.
pub trait Widget {
    /// Space reserved around this item inside the panel body.
    fn margins(&self) -> Sides {
        Sides::default()
    }

    /// Render to styled text. Must not touch the terminal.
    fn build(&self) -> StyledText;
}

/// A widget that can hold the selection and be confirmed.
pub trait Selectable: Widget {
    fn selected(&self) -> bool;

    fn set_selected(&mut self, on: bool);

    /// Run the confirm callback. [`crate::Error::MissingCallback`] when
    /// none is wired up.
    fn activate(&mut self) -> Result<()>;
}

/// A panel entry: either inert content or something selectable.
pub enum Item {
    Plain(Box<dyn Widget>),
    Selectable(Box<dyn Selectable>),
}

impl Item {
    pub fn plain(widget: impl Widget + 'static) -> Self {
        Item::Plain(Box::new(widget))
    }

    pub fn selectable(widget: impl Selectable + 'static) -> Self {
        Item::Selectable(Box::new(widget))
    }

    pub fn build(&self) -> StyledText {
        match self {
            Item::Plain(widget) => widget.build(),
            Item::Selectable(widget) => widget.build(),
        }
    }

    pub fn margins(&self) -> Sides {
        match self {
            Item::Plain(widget) => widget.margins(),
            Item::Selectable(widget) => widget.margins(),
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Item::Selectable(_))
    }

    pub fn as_selectable_mut(&mut self) -> Option<&mut dyn Selectable> {
        match self {
            Item::Selectable(widget) => Some(widget.as_mut()),
            Item::Plain(_) => None,
        }
    }
}
