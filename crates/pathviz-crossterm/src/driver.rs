//! Crossterm terminal driver.
//!
//! Provides a [`CrosstermDriver`] that implements [`Driver`], mapping the
//! visualizer's cell buffer to a terminal via crossterm.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::app::Driver;
use crate::messages::{Key, MouseAction, Msg};
use crate::screen::{Color, Frame};

/// How long one poll waits for the first event.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Translate one crossterm event. Key releases and repeats are dropped.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind == KeyEventKind::Press => {
            to_key(code).map(Msg::key)
        }
        Event::Mouse(me) => {
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::mouse(action, me.column as i32, me.row as i32))
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back end using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Current terminal size in cells.
    pub fn size() -> io::Result<(i32, i32)> {
        let (w, h) = terminal::size()?;
        Ok((w as i32, h as i32))
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Some(m) = to_msg(event::read()?) {
                tx.send(m).ok();
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout().lock();

        for fc in &frame.cells {
            let (p, cell) = (fc.pos, fc.cell);
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(cell.fg)),
                SetBackgroundColor(to_ct_color(cell.bg))
            )?;
            if cell.bold {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            write!(stdout, "{}", cell.ch)?;
            if cell.bold {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(stdout, style::ResetColor)?;

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_are_lowercased_and_filtered() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(to_msg(press), Some(Msg::char('b')));
        assert_eq!(
            to_msg(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))),
            Some(Msg::key(Key::Enter))
        );
        assert_eq!(
            to_msg(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))),
            None
        );
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_msg(release), None);
    }

    #[test]
    fn mouse_events_map_to_actions() {
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(Msg::mouse(MouseAction::Main, 4, 7))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 7)),
            Some(Msg::mouse(MouseAction::Move, 5, 7))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Up(MouseButton::Right), 0, 0)),
            Some(Msg::mouse(MouseAction::Release, 0, 0))
        );
        assert_eq!(to_msg(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Middle), 0, 0)),
            None
        );
    }

    #[test]
    fn default_colour_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
        assert_ne!(Color::from_rgb(0, 0, 0), Color::DEFAULT);
        assert_eq!(
            to_ct_color(Color::from_rgb(0, 0, 0)),
            CtColor::Rgb { r: 0, g: 0, b: 0 }
        );
        assert_eq!(Color::default(), Color::DEFAULT);
    }
}
