//! placard demo - a small themed menu drawn with the library's widgets.
//!
//! Arrow keys move the selection, Enter confirms, Esc leaves. The theme
//! can be overridden by a `placard.toml` next to the binary.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::info;

use placard::console::{AnsiConsole, Console};
use placard::select::{self, StopSignal};
use placard::theme::Theme;
use placard::widgets::{Button, Choice, Label};
use placard::{Border, Edge, Panel, StyledText};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("placard=info".parse()?),
        )
        .init();

    // double border by default; placard.toml may override
    let theme = Theme::load_over(
        "placard.toml",
        Theme {
            border: Border::DOUBLE,
            ..Theme::default()
        },
    )
    .context("failed to load theme")?;

    let stop = StopSignal::new();
    let quit = stop.clone();
    let chosen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let mut panel = Panel::new()
        .border(theme.border)
        .border_colour(theme.border_colour)
        .title("placard")
        .margin(1, Edge::All)
        .padding(1, Edge::Horizontal)
        .auto_close(false)
        .item(
            Label::new(StyledText::coloured("Pick a dish:", theme.default_colour))
                .margin(1, Edge::Bottom),
        )
        .item(dish("shawarma", &chosen, &theme))
        .item(dish("falafel", &chosen, &theme))
        .item(dish("kebab", &chosen, &theme))
        .item(
            Button::new("Quit")
                .themed(&theme)
                .on_confirm(move || quit.request())
                .margin(1, Edge::Top),
        );

    let mut console = AnsiConsole::new();
    console.prepare().context("failed to enter raw mode")?;
    select::show_with(&mut panel, &mut console, &stop)?;
    // leave raw mode before logging the outcome
    drop(console);

    match chosen.borrow().as_deref() {
        Some(name) => info!("enjoy your {}", name),
        None => info!("nothing picked"),
    }

    Ok(())
}

fn dish(name: &str, chosen: &Rc<RefCell<Option<String>>>, theme: &Theme) -> Choice {
    let slot = chosen.clone();
    let picked = name.to_string();
    Choice::new(name)
        .themed(theme)
        .on_confirm(move || *slot.borrow_mut() = Some(picked.clone()))
}
