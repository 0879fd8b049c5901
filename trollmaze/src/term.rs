//! Crossterm terminal session: raw mode, alternate screen, diffed painting
//! and key input.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use trollmaze_core::Direction;

use crate::draw::{Ink, Screen, compute_frame};

/// A player command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// The terminal was resized and must be repainted.
    Redraw,
    Quit,
}

/// Maps a key press to a command.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    let cmd = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Move(Direction::North),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Move(Direction::South),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Move(Direction::West),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Move(Direction::East),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Maps an [`Ink`] role to a terminal colour.
fn ink_color(ink: Ink) -> Color {
    match ink {
        Ink::Plain => Color::Reset,
        Ink::Wall => Color::Grey,
        Ink::Exit => Color::Green,
        Ink::Player => Color::Cyan,
        Ink::Troll => Color::Red,
        Ink::Status => Color::Yellow,
        Ink::Alert => Color::Red,
        Ink::Victory => Color::Green,
    }
}

/// An open terminal session. Dropping it restores the terminal.
pub struct Terminal {
    prev: Option<Screen>,
}

impl Terminal {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { prev: None })
    }

    /// Paint `screen`, writing only the cells that changed since the last
    /// call.
    pub fn draw(&mut self, screen: Screen) -> io::Result<()> {
        let frame = compute_frame(self.prev.as_ref(), &screen);
        let mut stdout = io::stdout().lock();

        if frame.clear {
            queue!(stdout, ResetColor, terminal::Clear(ClearType::All))?;
        }
        for fc in &frame.cells {
            queue!(
                stdout,
                cursor::MoveTo(fc.x, fc.y),
                SetForegroundColor(ink_color(fc.glyph.ink))
            )?;
            if fc.glyph.ink.is_bold() {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(fc.glyph.ch))?;
            if fc.glyph.ink.is_bold() {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()?;

        log::trace!("painted {} cells", frame.cells.len());
        self.prev = Some(screen);
        Ok(())
    }

    /// Block until the player issues a command.
    pub fn next_command(&mut self) -> io::Result<Command> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(cmd) = command_for(key) {
                        return Ok(cmd);
                    }
                }
                Event::Resize(..) => {
                    self.prev = None;
                    return Ok(Command::Redraw);
                }
                _ => {}
            }
        }
    }

    /// Block until any key is pressed.
    pub fn wait_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys() {
        assert_eq!(
            command_for(press(KeyCode::Char('w'))),
            Some(Command::Move(Direction::North))
        );
        assert_eq!(
            command_for(press(KeyCode::Left)),
            Some(Command::Move(Direction::West))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('D'))),
            Some(Command::Move(Direction::East))
        );
        assert_eq!(
            command_for(press(KeyCode::Down)),
            Some(Command::Move(Direction::South))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(press(KeyCode::Char('c'))), None);
        assert_eq!(command_for(press(KeyCode::Enter)), None);
    }
}
