//! Stock panel items: labels, choices, buttons.
//!
//! Selectable widgets keep their caption untouched; selection only
//! changes how `build` renders it (prefix plus recolour), so deselecting
//! always restores the original exactly.

use crossterm::style::Color;
use tracing::trace;

use crate::border::Border;
use crate::error::{Error, Result};
use crate::item::{Item, Selectable, Widget};
use crate::panel::Panel;
use crate::spacing::{Edge, Sides};
use crate::text::StyledText;
use crate::theme::Theme;

type Callback = Box<dyn FnMut()>;

/// Inert text on a panel.
pub struct Label {
    text: StyledText,
    margins: Sides,
}

impl Label {
    pub fn new(text: impl Into<StyledText>) -> Self {
        Self {
            text: text.into(),
            margins: Sides::default(),
        }
    }

    pub fn margin(mut self, amount: u16, edge: Edge) -> Self {
        self.margins.set(amount, edge);
        self
    }
}

impl Widget for Label {
    fn margins(&self) -> Sides {
        self.margins
    }

    fn build(&self) -> StyledText {
        self.text.clone()
    }
}

impl From<Label> for Item {
    fn from(label: Label) -> Self {
        Item::Plain(Box::new(label))
    }
}

/// A bare selectable line, the minimal menu entry.
pub struct Choice {
    caption: StyledText,
    margins: Sides,
    selected: bool,
    callback: Option<Callback>,
    select_colour: Color,
    select_prefix: String,
}

impl Choice {
    pub fn new(caption: impl Into<StyledText>) -> Self {
        let theme = Theme::default();
        Self {
            caption: caption.into(),
            margins: Sides::default(),
            selected: false,
            callback: None,
            select_colour: theme.select_colour,
            select_prefix: theme.select_prefix,
        }
    }

    pub fn on_confirm(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn margin(mut self, amount: u16, edge: Edge) -> Self {
        self.margins.set(amount, edge);
        self
    }

    pub fn themed(mut self, theme: &Theme) -> Self {
        self.select_colour = theme.select_colour;
        self.select_prefix = theme.select_prefix.clone();
        self
    }
}

impl Widget for Choice {
    fn margins(&self) -> Sides {
        self.margins
    }

    fn build(&self) -> StyledText {
        styled_caption(
            &self.caption,
            self.selected,
            &self.select_prefix,
            self.select_colour,
        )
    }
}

impl Selectable for Choice {
    fn selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, on: bool) {
        self.selected = on;
    }

    fn activate(&mut self) -> Result<()> {
        match self.callback.as_mut() {
            Some(callback) => {
                trace!("choice activated");
                callback();
                Ok(())
            }
            None => Err(Error::MissingCallback),
        }
    }
}

impl From<Choice> for Item {
    fn from(choice: Choice) -> Self {
        Item::Selectable(Box::new(choice))
    }
}

/// A selectable caption framed in its own one-level panel.
pub struct Button {
    caption: StyledText,
    margins: Sides,
    selected: bool,
    callback: Option<Callback>,
    border: Border,
    border_colour: Color,
    select_colour: Color,
    select_prefix: String,
}

impl Button {
    pub fn new(caption: impl Into<StyledText>) -> Self {
        let theme = Theme::default();
        Self {
            caption: caption.into(),
            margins: Sides::default(),
            selected: false,
            callback: None,
            border: theme.border,
            border_colour: theme.border_colour,
            select_colour: theme.select_colour,
            select_prefix: theme.select_prefix,
        }
    }

    pub fn on_confirm(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn margin(mut self, amount: u16, edge: Edge) -> Self {
        self.margins.set(amount, edge);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn themed(mut self, theme: &Theme) -> Self {
        self.border = theme.border;
        self.border_colour = theme.border_colour;
        self.select_colour = theme.select_colour;
        self.select_prefix = theme.select_prefix.clone();
        self
    }
}

impl Widget for Button {
    fn margins(&self) -> Sides {
        self.margins
    }

    fn build(&self) -> StyledText {
        let caption = styled_caption(
            &self.caption,
            self.selected,
            &self.select_prefix,
            self.select_colour,
        );
        Panel::new()
            .border(self.border)
            .border_colour(self.border_colour)
            .padding(1, Edge::Horizontal)
            .item(Label::new(caption))
            .build()
    }
}

impl Selectable for Button {
    fn selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, on: bool) {
        self.selected = on;
    }

    fn activate(&mut self) -> Result<()> {
        match self.callback.as_mut() {
            Some(callback) => {
                trace!("button activated");
                callback();
                Ok(())
            }
            None => Err(Error::MissingCallback),
        }
    }
}

impl From<Button> for Item {
    fn from(button: Button) -> Self {
        Item::Selectable(Box::new(button))
    }
}

fn styled_caption(
    caption: &StyledText,
    selected: bool,
    prefix: &str,
    colour: Color,
) -> StyledText {
    if !selected {
        return caption.clone();
    }
    let mut text = StyledText::plain(prefix);
    text.append(caption.clone());
    text.set_colour(colour);
    text
}
