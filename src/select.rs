//! Modal single-selection over a panel's selectable items.
//!
//! A blocking loop: paint, read one key, apply it. Frames are erased in
//! place using the line count the previous paint reported, so the menu
//! redraws where it stands instead of scrolling the terminal.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::console::{Console, Key};
use crate::error::Result;
use crate::panel::Panel;

/// Cooperative stop flag. Callbacks hold a clone and ask the loop that
/// is driving them to end; the flag is checked before every repaint.
#[derive(Clone, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(false);
    }
}

/// Run the selection loop until a confirm closes it or it is cancelled.
pub fn show(panel: &mut Panel, console: &mut dyn Console) -> Result<()> {
    show_with(panel, console, &StopSignal::new())
}

/// [`show`], with an external stop signal.
///
/// A panel with nothing selectable is painted once and left alone.
/// Otherwise the first selectable item takes the selection and the loop
/// runs: Up/Down move the selection with circular wrap, Confirm
/// activates (fatal if the item has no callback, closing the loop
/// afterwards unless the panel opted out), Cancel always terminates.
/// The final frame stays on screen.
pub fn show_with(panel: &mut Panel, console: &mut dyn Console, stop: &StopSignal) -> Result<()> {
    console.prepare()?;

    let selectable: Vec<usize> = panel
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_selectable())
        .map(|(i, _)| i)
        .collect();

    if selectable.is_empty() {
        debug!("nothing selectable, painting once");
        panel.display(console)?;
        return Ok(());
    }

    let mut cursor: Option<usize> = Some(0);
    set_selected(panel, selectable[0], true);
    debug!(items = selectable.len(), "selection loop entered");

    let mut printed = 0usize;
    loop {
        if stop.is_requested() {
            debug!("stop requested, ending selection");
            break;
        }

        for _ in 0..printed {
            console.clear_last_line()?;
        }
        printed = panel.display(console)?;

        let key = console.read_key()?;
        trace!(?key, "key");
        match key {
            Key::Up | Key::Down => {
                if let Some(pos) = cursor {
                    let next = match key {
                        Key::Up => {
                            if pos == 0 {
                                selectable.len() - 1
                            } else {
                                pos - 1
                            }
                        }
                        _ => {
                            if pos + 1 >= selectable.len() {
                                0
                            } else {
                                pos + 1
                            }
                        }
                    };
                    set_selected(panel, selectable[pos], false);
                    set_selected(panel, selectable[next], true);
                    cursor = Some(next);
                    trace!(from = pos, to = next, "selection moved");
                }
            }
            Key::Confirm => match cursor {
                Some(pos) => {
                    confirm(panel, selectable[pos])?;
                    if panel.is_auto_close() {
                        debug!("auto-close after confirm");
                        break;
                    }
                }
                // nothing selected: just redraw
                None => {}
            },
            Key::Cancel => {
                debug!("selection cancelled");
                break;
            }
            Key::Other => {}
        }
    }

    Ok(())
}

fn confirm(panel: &mut Panel, index: usize) -> Result<()> {
    match panel.items_mut()[index].as_selectable_mut() {
        Some(item) => item.activate(),
        None => Ok(()),
    }
}

fn set_selected(panel: &mut Panel, index: usize, on: bool) {
    if let Some(item) = panel
        .items_mut()
        .get_mut(index)
        .and_then(|item| item.as_selectable_mut())
    {
        item.set_selected(on);
    }
}
