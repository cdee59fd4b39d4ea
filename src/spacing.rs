//! Per-side spacing amounts, the edge selector used to set them, and the
//! alignment tag panels carry.

/// Which side(s) of a panel or item a spacing amount applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
    /// Top and bottom together.
    Vertical,
    /// Left and right together.
    Horizontal,
    All,
}

/// Spacing amounts for the four sides, in terminal cells (columns or rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub left: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Sides {
    pub fn uniform(amount: u16) -> Self {
        Self {
            top: amount,
            left: amount,
            right: amount,
            bottom: amount,
        }
    }

    /// Set the amount on the side(s) named by `edge`, leaving the rest alone.
    pub fn set(&mut self, amount: u16, edge: Edge) {
        match edge {
            Edge::Top => self.top = amount,
            Edge::Left => self.left = amount,
            Edge::Right => self.right = amount,
            Edge::Bottom => self.bottom = amount,
            Edge::Vertical => {
                self.top = amount;
                self.bottom = amount;
            }
            Edge::Horizontal => {
                self.left = amount;
                self.right = amount;
            }
            Edge::All => *self = Self::uniform(amount),
        }
    }
}

/// Horizontal placement within a containing panel.
///
/// Carried for composition; the stacked layout does not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}
