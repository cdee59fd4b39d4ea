//! Box-drawing glyph sets and horizontal rule building.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The six glyphs that frame a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Border {
    pub const SINGLE: Border = Border {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Double horizontals with single verticals.
    pub const DOUBLE: Border = Border {
        top_left: '╒',
        top_right: '╕',
        bottom_left: '╘',
        bottom_right: '╛',
        horizontal: '═',
        vertical: '│',
    };

    pub const ROUNDED: Border = Border {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Look up a preset by name (for config files).
    pub fn named(name: &str) -> Option<Border> {
        match name.to_lowercase().as_str() {
            "single" => Some(Self::SINGLE),
            "double" => Some(Self::DOUBLE),
            "rounded" => Some(Self::ROUNDED),
            _ => None,
        }
    }

    /// A full-width rule: corner, `width` horizontals, corner.
    /// `top` picks which corner pair.
    pub fn rule(&self, width: usize, top: bool) -> String {
        let (left, right) = if top {
            (self.top_left, self.top_right)
        } else {
            (self.bottom_left, self.bottom_right)
        };
        let mut rule = String::with_capacity(width + 2);
        rule.push(left);
        for _ in 0..width {
            rule.push(self.horizontal);
        }
        rule.push(right);
        rule
    }

    /// A top rule with the title embedded after the first horizontal,
    /// e.g. `┌─ Title ───┐`. Falls back to a plain rule when the title
    /// is empty or nothing of it fits. Glyph width always equals a plain
    /// rule of the same `width`.
    pub fn titled_rule(&self, width: usize, title: &str) -> String {
        // one horizontal plus two spaces of dressing
        let max_title = width.saturating_sub(3);
        let title = clip_to_width(title, max_title);
        if title.is_empty() {
            return self.rule(width, true);
        }

        let used = 3 + title.width();
        let mut rule = String::with_capacity(width + 2);
        rule.push(self.top_left);
        rule.push(self.horizontal);
        rule.push(' ');
        rule.push_str(&title);
        rule.push(' ');
        for _ in 0..width - used {
            rule.push(self.horizontal);
        }
        rule.push(self.top_right);
        rule
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Longest prefix of `text` that fits in `max` display cells. Control
/// characters (no display width) are dropped; a stray `'\n'` must not
/// split the rule.
fn clip_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = match ch.width() {
            Some(w) => w,
            None => continue,
        };
        if used + w > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}
