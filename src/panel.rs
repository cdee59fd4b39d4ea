//! Panel layout and rendering.
//!
//! A panel stacks its items vertically, frames them with a border, and
//! builds styled text without touching the terminal. Painting goes
//! through a [`Console`] and reports how many lines were printed, which
//! is what selection loops use to erase a frame in place.

use crossterm::style::Color;
use tracing::debug;

use crate::border::Border;
use crate::console::Console;
use crate::error::Result;
use crate::item::{Item, Widget};
use crate::spacing::{Alignment, Edge, Sides};
use crate::text::{Run, StyledText};

pub struct Panel {
    items: Vec<Item>,
    margin: Sides,
    padding: Sides,
    border: Border,
    border_colour: Color,
    title: Option<String>,
    alignment: Alignment,
    auto_close: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            margin: Sides::default(),
            padding: Sides::default(),
            border: Border::SINGLE,
            border_colour: Color::Reset,
            title: None,
            alignment: Alignment::Left,
            auto_close: true,
        }
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_colour(mut self, colour: Color) -> Self {
        self.border_colour = colour;
        self
    }

    /// Spacing outside the border.
    pub fn margin(mut self, amount: u16, edge: Edge) -> Self {
        self.margin.set(amount, edge);
        self
    }

    /// Spacing between the border and the body.
    pub fn padding(mut self, amount: u16, edge: Edge) -> Self {
        self.padding.set(amount, edge);
        self
    }

    /// Title embedded in the top border rule.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Placement within a containing panel. Carried for composition; the
    /// stacked layout does not consume it.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Whether a confirmed selection ends the selection loop. On by
    /// default.
    pub fn auto_close(mut self, on: bool) -> Self {
        self.auto_close = on;
        self
    }

    /// Append an item.
    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Insert an item at `index`, clamped to the end.
    pub fn item_at(mut self, index: usize, item: impl Into<Item>) -> Self {
        let index = index.min(self.items.len());
        self.items.insert(index, item.into());
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn is_auto_close(&self) -> bool {
        self.auto_close
    }

    /// Lay the panel out as styled text. Pure: identical state renders
    /// identically.
    ///
    /// Item margins are applied while flattening (top/bottom as blank
    /// body rows, left and right as space runs around the line), the
    /// body is trimmed of leading blank rows, and every row is framed
    /// with the border glyphs in the border colour. Body runs keep their
    /// own colours.
    pub fn build(&self) -> StyledText {
        // flatten items to body rows, tracking each row's cell width
        let mut body: Vec<(StyledText, usize)> = Vec::new();
        for item in &self.items {
            let margins = item.margins();
            for _ in 0..margins.top {
                body.push((StyledText::new(), 0));
            }
            for line in item.build().lines() {
                let mut row = StyledText::new();
                if margins.left > 0 {
                    row.push_str(" ".repeat(margins.left as usize), Color::Reset);
                }
                let width = margins.left as usize + line.width() + margins.right as usize;
                row.append(line);
                if margins.right > 0 {
                    row.push_str(" ".repeat(margins.right as usize), Color::Reset);
                }
                body.push((row, width));
            }
            for _ in 0..margins.bottom {
                body.push((StyledText::new(), 0));
            }
        }

        // leading blank rows only; a row holding an empty run is content
        let leading_blanks = body.iter().take_while(|(row, _)| row.is_empty()).count();
        body.drain(..leading_blanks);

        let max_width = body.iter().map(|(_, width)| *width).max().unwrap_or(0);
        let interior = max_width + self.padding.left as usize + self.padding.right as usize;

        let vertical = self.border.vertical.to_string();
        let mut rows: Vec<StyledText> = Vec::new();

        // an empty run keeps margin rows alive through lines()
        for _ in 0..self.margin.top {
            rows.push(StyledText::plain(""));
        }

        let top_rule = match &self.title {
            Some(title) => self.border.titled_rule(interior, title),
            None => self.border.rule(interior, true),
        };
        rows.push(self.framed(StyledText::coloured(top_rule, self.border_colour)));

        for _ in 0..self.padding.top {
            rows.push(self.framed(self.interior_blank(&vertical, interior)));
        }

        for (line, width) in body {
            let mut row = StyledText::new();
            row.push_str(&vertical, self.border_colour);
            if self.padding.left > 0 {
                row.push_str(" ".repeat(self.padding.left as usize), Color::Reset);
            }
            row.append(line);
            let fill = interior - self.padding.left as usize - width;
            if fill > 0 {
                row.push_str(" ".repeat(fill), Color::Reset);
            }
            row.push_str(&vertical, self.border_colour);
            rows.push(self.framed(row));
        }

        for _ in 0..self.padding.bottom {
            rows.push(self.framed(self.interior_blank(&vertical, interior)));
        }

        rows.push(self.framed(StyledText::coloured(
            self.border.rule(interior, false),
            self.border_colour,
        )));

        for _ in 0..self.margin.bottom {
            rows.push(StyledText::plain(""));
        }

        debug!(interior, lines = rows.len(), "panel built");

        let mut out = StyledText::new();
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                out.push_breaks(1);
            }
            out.append(row);
        }
        out
    }

    /// Paint the built panel one styled run at a time and return the
    /// number of lines printed.
    pub fn display(&self, console: &mut dyn Console) -> Result<usize> {
        let built = self.build();
        let mut printed = 0;
        for line in built.lines() {
            for run in line.runs() {
                if let Run::Text { content, colour } = run {
                    console.write_run(content, *colour)?;
                }
            }
            console.newline()?;
            printed += 1;
        }
        Ok(printed)
    }

    /// Wrap an interior row in the panel's outer margin columns.
    fn framed(&self, interior_row: StyledText) -> StyledText {
        if self.margin.left == 0 && self.margin.right == 0 {
            return interior_row;
        }
        let mut row = StyledText::new();
        if self.margin.left > 0 {
            row.push_str(" ".repeat(self.margin.left as usize), Color::Reset);
        }
        row.append(interior_row);
        if self.margin.right > 0 {
            row.push_str(" ".repeat(self.margin.right as usize), Color::Reset);
        }
        row
    }

    fn interior_blank(&self, vertical: &str, interior: usize) -> StyledText {
        let mut row = StyledText::new();
        row.push_str(vertical, self.border_colour);
        if interior > 0 {
            row.push_str(" ".repeat(interior), Color::Reset);
        }
        row.push_str(vertical, self.border_colour);
        row
    }
}

/// A panel can sit on another panel. Its own margin is already part of
/// its rendering, so no extra margins are reported.
impl Widget for Panel {
    fn build(&self) -> StyledText {
        Panel::build(self)
    }
}

impl From<Panel> for Item {
    fn from(panel: Panel) -> Self {
        Item::Plain(Box::new(panel))
    }
}
