//! Screen layout: turns a [`Game`] into a grid of styled characters and
//! diffs successive grids so only changed cells reach the terminal.

use trollmaze_core::{Location, Tile};

use crate::game::{Game, GameState};

/// Column of the maze's left edge.
pub const MAZE_X: u16 = 5;
/// Row of the maze's top edge.
pub const MAZE_Y: u16 = 3;
/// Gap between the maze and the troll list on its right.
const SIDEBAR_GAP: u16 = 3;
const SIDEBAR_WIDTH: u16 = 20;

/// Colour role of a screen cell. The terminal maps each to a concrete colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ink {
    #[default]
    Plain,
    Wall,
    Exit,
    Player,
    Troll,
    Status,
    Alert,
    Victory,
}

impl Ink {
    /// Whether the cell is drawn bold.
    pub fn is_bold(self) -> bool {
        matches!(self, Ink::Player | Ink::Troll | Ink::Alert | Ink::Victory)
    }
}

/// One styled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            ink: Ink::Plain,
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A fixed-size grid of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Screen {
    /// A blank screen.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a cell. Writes outside the screen are clipped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, ink: Ink) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Glyph { ch, ink };
        }
    }

    /// Write `text` left to right starting at `(x, y)`.
    pub fn print(&mut self, x: u16, y: u16, text: &str, ink: Ink) {
        for (i, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(i) else {
                break;
            };
            self.set(x.saturating_add(dx), y, ch, ink);
        }
    }

    /// The characters of row `y`, for tests and logging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Frame / compute_frame
// ---------------------------------------------------------------------------

/// A changed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub x: u16,
    pub y: u16,
    pub glyph: Glyph,
}

/// The cells to repaint to go from one screen to the next.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    /// The terminal must be cleared before painting.
    pub clear: bool,
}

/// Compute the cells that differ between `prev` and `curr`.
///
/// Without a previous screen, or when the size changed, the frame clears the
/// terminal and repaints every non-blank cell.
pub fn compute_frame(prev: Option<&Screen>, curr: &Screen) -> Frame {
    let prev = prev.filter(|p| p.size() == curr.size());
    let blank = Glyph::default();
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let cc = curr.get(x, y).unwrap_or(blank);
            let pc = prev.and_then(|p| p.get(x, y)).unwrap_or(blank);
            if cc != pc {
                cells.push(FrameCell { x, y, glyph: cc });
            }
        }
    }
    Frame {
        cells,
        clear: prev.is_none(),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn maze_cell(loc: Location) -> (u16, u16) {
    (
        MAZE_X.saturating_add(loc.x.max(0) as u16),
        MAZE_Y.saturating_add(loc.y.max(0) as u16),
    )
}

/// Lay out the whole game screen.
pub fn render(game: &Game) -> Screen {
    let mw = game.maze.width().max(0) as u16;
    let mh = game.maze.height().max(0) as u16;
    let sidebar_x = MAZE_X + mw + SIDEBAR_GAP;
    let mut screen = Screen::new(sidebar_x + SIDEBAR_WIDTH, MAZE_Y + mh + 3);

    screen.print(
        0,
        0,
        &format!("Player: {}   Turn: {}", game.player.loc, game.turn),
        Ink::Status,
    );

    for (loc, tile) in game.maze.iter() {
        let (x, y) = maze_cell(loc);
        let ink = match tile {
            Tile::Wall => Ink::Wall,
            Tile::Floor => Ink::Plain,
            Tile::Exit => Ink::Exit,
        };
        screen.set(x, y, tile.glyph(), ink);
    }

    for (i, troll) in game.trolls.iter().enumerate() {
        let row = MAZE_Y + i as u16;
        if game.in_vision(troll.loc()) {
            let (x, y) = maze_cell(troll.loc());
            screen.set(x, y, 'T', Ink::Troll);
            screen.print(
                sidebar_x,
                row,
                &format!("Troll {}: {}", i + 1, troll.loc()),
                Ink::Status,
            );
        } else {
            screen.print(sidebar_x, row, &format!("Troll {}: unseen", i + 1), Ink::Status);
        }
    }

    let (px, py) = maze_cell(game.player.loc);
    match game.state {
        GameState::Lost => screen.set(px, py, 'T', Ink::Alert),
        _ => screen.set(px, py, 'P', Ink::Player),
    }

    let footer = MAZE_Y + mh + 1;
    match game.state {
        GameState::Playing => screen.print(
            MAZE_X,
            footer,
            "wasd/arrows: move   q: quit",
            Ink::Status,
        ),
        GameState::Won => screen.print(
            MAZE_X,
            footer,
            "You escaped the maze! Press any key.",
            Ink::Victory,
        ),
        GameState::Lost => screen.print(
            MAZE_X,
            footer,
            "GAME OVER: a troll got you. Press any key.",
            Ink::Alert,
        ),
    }
    screen
}
