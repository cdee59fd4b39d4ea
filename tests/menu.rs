//! End-to-end tests for panel rendering and menu selection
//!
//! Drives real panels through the scripted console driver: full frames,
//! key sequences, callbacks, and erase accounting.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use crossterm::style::Color;

use placard::testing::ScriptedConsole;
use placard::widgets::{Button, Choice, Label};
use placard::{select, Border, Edge, Error, Key, Panel, StopSignal, Theme};

// ============================================================================
// Helpers
// ============================================================================

type PickLog = Rc<RefCell<Vec<String>>>;

fn logging_choice(name: &str, log: &PickLog) -> Choice {
    let log = log.clone();
    let picked = name.to_string();
    Choice::new(name).on_confirm(move || log.borrow_mut().push(picked.clone()))
}

/// A borderless-config menu of three selectable choices.
fn three_dish_menu(log: &PickLog) -> Panel {
    Panel::new()
        .item(logging_choice("first", log))
        .item(logging_choice("second", log))
        .item(logging_choice("third", log))
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_hi_box_renders_three_lines() -> Result<()> {
    let mut panel = Panel::new()
        .padding(1, Edge::Horizontal)
        .item(Label::new("Hi"));
    let mut console = ScriptedConsole::new([]);

    select::show(&mut panel, &mut console)?;

    assert_eq!(console.screen, vec!["┌────┐", "│ Hi │", "└────┘"]);
    Ok(())
}

#[test]
fn test_titled_double_border_with_margins() {
    let panel = Panel::new()
        .border(Border::DOUBLE)
        .title("demo")
        .margin(1, Edge::All)
        .padding(1, Edge::Horizontal)
        .item(Label::new("hello there"));

    assert_eq!(
        panel.build().to_string(),
        "\n ╒═ demo ══════╕ \n │ hello there │ \n ╘═════════════╛ \n"
    );
}

#[test]
fn test_multiline_label_fills_to_widest() {
    let panel = Panel::new().item(Label::new("two\nlines!"));
    assert_eq!(
        panel.build().to_string(),
        "┌──────┐\n│two   │\n│lines!│\n└──────┘"
    );
}

#[test]
fn test_button_nests_as_boxed_item() -> Result<()> {
    let mut panel = Panel::new()
        .item(Label::new("press it:"))
        .item(Button::new("Ok").on_confirm(|| {}));
    let mut console = ScriptedConsole::new([Key::Cancel]);

    select::show(&mut panel, &mut console)?;

    // label, three button lines, two border lines
    assert_eq!(console.screen.len(), 6);
    assert!(console.screen[2].contains("┌──────┐"));
    assert!(console.screen[3].contains("> Ok"));
    Ok(())
}

// ============================================================================
// Selection movement
// ============================================================================

#[test]
fn test_down_wraps_circularly_before_confirm() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = three_dish_menu(&log);
    let mut console =
        ScriptedConsole::new([Key::Down, Key::Down, Key::Down, Key::Confirm]);

    select::show(&mut panel, &mut console)?;

    // three downs from the first entry wrap back onto it
    assert_eq!(*log.borrow(), vec!["first".to_string()]);
    Ok(())
}

#[test]
fn test_up_from_first_wraps_to_last() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = three_dish_menu(&log);
    let mut console = ScriptedConsole::new([Key::Up, Key::Confirm]);

    select::show(&mut panel, &mut console)?;

    assert_eq!(*log.borrow(), vec!["third".to_string()]);
    Ok(())
}

#[test]
fn test_selected_entry_gets_prefix_and_colour() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = three_dish_menu(&log);
    let mut console = ScriptedConsole::new([Key::Cancel]);

    select::show(&mut panel, &mut console)?;

    assert_eq!(console.screen[1], "│> first│");
    assert_eq!(console.screen[2], "│second │");
    assert!(console
        .runs
        .iter()
        .any(|(text, colour)| text == "> " && *colour == Color::Green));
    Ok(())
}

#[test]
fn test_redraw_erases_exactly_one_frame() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = Panel::new()
        .item(logging_choice("a", &log))
        .item(logging_choice("b", &log));
    let mut console = ScriptedConsole::new([Key::Down, Key::Cancel]);

    select::show(&mut panel, &mut console)?;

    // two frames of four lines; only the first was erased
    assert_eq!(console.lines.len(), 8);
    assert_eq!(console.erased, 4);
    assert_eq!(console.screen.len(), 4);
    assert_eq!(console.screen[2], "│> b│");
    Ok(())
}

// ============================================================================
// Confirm, cancel, and termination
// ============================================================================

#[test]
fn test_confirm_closes_by_default() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = three_dish_menu(&log);
    let mut console = ScriptedConsole::new([Key::Down, Key::Confirm, Key::Down]);

    select::show(&mut panel, &mut console)?;

    assert_eq!(*log.borrow(), vec!["second".to_string()]);
    // the loop ended on confirm, leaving the trailing key unread
    assert_eq!(console.remaining_keys(), 1);
    Ok(())
}

#[test]
fn test_confirm_keeps_menu_open_when_auto_close_off() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = three_dish_menu(&log).auto_close(false);
    let mut console = ScriptedConsole::new([Key::Confirm, Key::Confirm, Key::Cancel]);

    select::show(&mut panel, &mut console)?;

    assert_eq!(
        *log.borrow(),
        vec!["first".to_string(), "first".to_string()]
    );
    Ok(())
}

#[test]
fn test_cancel_terminates_without_activation() -> Result<()> {
    let log: PickLog = Rc::default();
    let mut panel = three_dish_menu(&log);
    let mut console = ScriptedConsole::new([Key::Cancel]);

    select::show(&mut panel, &mut console)?;

    assert!(log.borrow().is_empty());
    // the final frame stays on screen
    assert_eq!(console.screen.len(), 5);
    Ok(())
}

#[test]
fn test_confirm_without_callback_is_fatal() {
    let mut panel = Panel::new().item(Choice::new("unwired"));
    let mut console = ScriptedConsole::new([Key::Confirm]);

    let err = select::show(&mut panel, &mut console).unwrap_err();
    assert!(matches!(err, Error::MissingCallback));
}

#[test]
fn test_quit_button_ends_loop_through_stop_signal() -> Result<()> {
    let log: PickLog = Rc::default();
    let stop = StopSignal::new();
    let quit = stop.clone();

    let mut panel = three_dish_menu(&log)
        .auto_close(false)
        .item(Button::new("Quit").on_confirm(move || quit.request()));
    let mut console = ScriptedConsole::new([Key::Up, Key::Confirm]);

    select::show_with(&mut panel, &mut console, &stop)?;

    // Up wrapped onto the button; its callback stopped the loop before
    // any further painting
    assert!(log.borrow().is_empty());
    assert_eq!(console.remaining_keys(), 0);
    assert_eq!(console.lines.len(), console.erased + console.screen.len());
    Ok(())
}

// ============================================================================
// Theme plumbing
// ============================================================================

#[test]
fn test_theme_file_drives_selection_colour() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("placard.toml");
    std::fs::write(
        &path,
        "[theme]\nselect_colour = \"cyan\"\nselect_prefix = \"* \"\nborder = \"rounded\"\n",
    )?;
    let theme = Theme::load(&path)?;

    let mut panel = Panel::new()
        .border(theme.border)
        .item(Choice::new("themed").themed(&theme).on_confirm(|| {}));
    let mut console = ScriptedConsole::new([Key::Cancel]);

    select::show_with(&mut panel, &mut console, &StopSignal::new())?;

    assert_eq!(console.screen[0], "╭────────╮");
    assert_eq!(console.screen[1], "│* themed│");
    assert!(console
        .runs
        .iter()
        .any(|(text, colour)| text == "* " && *colour == Color::Cyan));
    Ok(())
}
