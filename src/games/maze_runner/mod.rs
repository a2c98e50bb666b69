//! Maze Runner - discrete grid navigation
//!
//! Levels are static tile grids. The player moves one cell per key press or
//! swipe; walls and the grid edge simply reject the move. Reaching the exit
//! advances the campaign to the next level, or completes it.

pub mod levels;

/// Delay before the next level is shown after an exit is reached (seconds).
/// Sequencing is the shell's timer; the campaign itself advances immediately.
pub const TRANSITION_DELAY: f32 = 1.5;

/// Grid tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Path,
    Wall,
    Start,
    Exit,
}

impl Tile {
    fn from_byte(byte: u8) -> Option<Tile> {
        match byte {
            0 => Some(Tile::Path),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Start),
            3 => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// A grid coordinate. Signed so a candidate step can fall off the grid
/// before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// An immutable maze level
#[derive(Debug, Clone)]
pub struct GridLevel {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
    pub start: Cell,
    pub exit: Cell,
}

impl GridLevel {
    /// Build a level from a byte grid. Returns None when the rows are
    /// ragged, a byte is not a tile, or the grid lacks a start or exit.
    pub fn from_rows(rows: &[&[u8]]) -> Option<GridLevel> {
        let height = rows.len();
        let width = rows.first()?.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut start = None;
        let mut exit = None;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &byte) in row.iter().enumerate() {
                let tile = Tile::from_byte(byte)?;
                let cell = Cell {
                    x: x as i32,
                    y: y as i32,
                };
                match tile {
                    Tile::Start => start = Some(cell),
                    Tile::Exit => exit = Some(cell),
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        Some(GridLevel {
            width,
            height,
            tiles,
            start: start?,
            exit: exit?,
        })
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    /// Tile at `cell`, or None out of bounds
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.tiles.get(cell.y as usize * self.width + cell.x as usize).copied()
    }
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub cell: Cell,
    pub reached_exit: bool,
}

/// Attempt one step. Out-of-bounds and wall targets leave the cell unchanged.
pub fn try_move(level: &GridLevel, from: Cell, dir: Direction) -> MoveOutcome {
    let (dx, dy) = dir.delta();
    let candidate = Cell {
        x: from.x + dx,
        y: from.y + dy,
    };
    match level.tile(candidate) {
        Some(tile) if !tile.is_wall() => MoveOutcome {
            cell: candidate,
            reached_exit: candidate == level.exit,
        },
        _ => MoveOutcome {
            cell: from,
            reached_exit: false,
        },
    }
}

/// Progress through an ordered level sequence
#[derive(Debug, Clone)]
pub struct Campaign {
    levels: Vec<GridLevel>,
    pub level_index: usize,
    pub player: Cell,
    pub completed: bool,
}

impl Campaign {
    /// A campaign over the given levels; None when the list is empty.
    pub fn new(levels: Vec<GridLevel>) -> Option<Campaign> {
        let player = levels.first()?.start;
        Some(Campaign {
            levels,
            level_index: 0,
            player,
            completed: false,
        })
    }

    /// A campaign over the six built-in levels
    pub fn builtin() -> Option<Campaign> {
        Campaign::new(levels::builtin())
    }

    pub fn level(&self) -> &GridLevel {
        &self.levels[self.level_index]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Apply one move. Reaching the exit advances to the next level (the
    /// shell shows it after `TRANSITION_DELAY`) or completes the campaign.
    pub fn step(&mut self, dir: Direction) -> MoveOutcome {
        if self.completed {
            return MoveOutcome {
                cell: self.player,
                reached_exit: false,
            };
        }
        let outcome = try_move(self.level(), self.player, dir);
        self.player = outcome.cell;
        if outcome.reached_exit {
            self.advance();
        }
        outcome
    }

    /// Put the player back on the current level's start
    pub fn restart_level(&mut self) {
        self.player = self.level().start;
    }

    /// Back to the first level
    pub fn restart(&mut self) {
        self.level_index = 0;
        self.completed = false;
        self.restart_level();
    }

    fn advance(&mut self) {
        if self.level_index + 1 < self.levels.len() {
            self.level_index += 1;
            self.player = self.level().start;
            log::debug!("maze level {} begins", self.level_index + 1);
        } else {
            self.completed = true;
            log::debug!("maze campaign complete");
        }
    }
}
