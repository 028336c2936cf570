//! Event loop: crossterm input mapped onto the widget state machine.

use chipline::{ChipInputState, Key, KeyOutcome, Modifiers};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

use crate::error::AppError;
use crate::render::{self, Layout};
use crate::terminal::Terminal;

/// Sample candidate pool for the demo session.
const CANDIDATES: &[&str] = &["Nick Giannopoulos", "John Doe", "Jane Doe", "Alice", "Bob"];

pub struct App {
    state: ChipInputState,
    /// Cursor into the filtered candidate list.
    list_cursor: usize,
    /// Hit regions from the last draw.
    layout: Layout,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: ChipInputState::new(CANDIDATES.iter().copied()),
            list_cursor: 0,
            layout: Layout::default(),
            should_quit: false,
        }
    }

    pub fn run(mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        loop {
            let (width, height) = terminal.size()?;
            self.layout =
                render::draw(terminal.stdout(), &self.state, self.list_cursor, width, height)?;

            match terminal.read()? {
                CrosstermEvent::Key(key) => self.on_key(key),
                CrosstermEvent::Mouse(mouse) => self.on_mouse(mouse),
                CrosstermEvent::Resize(..) => {}
                _ => {}
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn on_key(&mut self, event: KeyEvent) {
        if event.kind == KeyEventKind::Release {
            return;
        }

        let modifiers = convert_modifiers(event.modifiers);
        match event.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if modifiers.ctrl => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        let Some(key) = convert_key(event.code) else {
            return;
        };

        match key {
            // List navigation still goes through the widget so the disarm
            // guard sees every key press.
            Key::Up => {
                self.state.handle_key(key, modifiers);
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            Key::Down => {
                self.state.handle_key(key, modifiers);
                let last = self.state.filtered_len().saturating_sub(1);
                self.list_cursor = (self.list_cursor + 1).min(last);
            }
            _ => match self.state.handle_key(key, modifiers) {
                KeyOutcome::FilterChanged => self.list_cursor = 0,
                KeyOutcome::Submitted => self.activate_cursor(),
                KeyOutcome::Removed(chip) => {
                    log::info!("removed chip {:?} ({})", chip.id, chip.label);
                }
                KeyOutcome::Armed(_) | KeyOutcome::Handled | KeyOutcome::Ignored => {}
            },
        }
    }

    fn on_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        // Chip close button
        if let Some(&(_, _, id)) = self
            .layout
            .close_cells
            .iter()
            .find(|&&(x, y, _)| x == event.column && y == event.row)
        {
            self.state.remove(id);
            return;
        }

        // Candidate row: clicking activates, same as Enter.
        if let Some((_, label)) = self
            .layout
            .candidate_rows
            .iter()
            .find(|(y, _)| *y == event.row)
        {
            let label = label.clone();
            if self.state.select(&label).is_some() {
                self.list_cursor = 0;
            }
        }
    }

    /// Activate the candidate under the list cursor, if any.
    fn activate_cursor(&mut self) {
        let Some(label) = self
            .state
            .filtered_labels()
            .nth(self.list_cursor)
            .map(str::to_string)
        else {
            return;
        };
        if self.state.select(&label).is_some() {
            self.list_cursor = 0;
        }
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    })
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_conversion_covers_editing_keys() {
        assert_eq!(convert_key(KeyCode::Char('a')), Some(Key::Char('a')));
        assert_eq!(convert_key(KeyCode::Backspace), Some(Key::Backspace));
        assert_eq!(convert_key(KeyCode::Enter), Some(Key::Enter));
        assert_eq!(convert_key(KeyCode::F(1)), None);
    }

    #[test]
    fn modifier_conversion_maps_ctrl() {
        let mods = convert_modifiers(KeyModifiers::CONTROL);
        assert!(mods.ctrl);
        assert!(!mods.shift);
        assert!(!mods.alt);
    }
}
