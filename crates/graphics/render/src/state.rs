//! The game state snapshot that gets rendered
//!
//! Positions reported by the environment do not share one axis convention:
//! the agent's `x` indexes rows, while for pursuers and items `x` indexes
//! columns. [Position::agent_cell] and [Position::cell] are the only places
//! where that distinction is made.

use std::{fmt, ops::Deref};

use image::Texture;

use crate::{Mode, RenderError};

/// The number of pursuers in every state
pub const PURSUER_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tile {
    Wall,
    #[default]
    Passage,
}

/// A `(row, column)` index into a grid or a layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The center pixel of this cell after it has been magnified by `factor`
    #[inline]
    #[must_use]
    pub const fn center(self, factor: usize) -> Self {
        Self {
            row: self.row * factor + factor / 2,
            col: self.col * factor + factor / 2,
        }
    }

    /// Move the cell by the given number of rows and columns
    ///
    /// Moving past zero wraps around, which makes the result land outside
    /// of every layer.
    #[inline]
    #[must_use]
    pub const fn offset(self, rows: isize, cols: isize) -> Self {
        Self {
            row: self.row.wrapping_add_signed(rows),
            col: self.col.wrapping_add_signed(cols),
        }
    }
}

/// A coordinate pair as reported by the environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell of a pursuer, item or power item: `x` is the column, `y` the row
    #[inline]
    #[must_use]
    pub const fn cell(self) -> Cell {
        Cell::new(self.y, self.x)
    }

    /// The cell of the agent: `x` is the row, `y` the column
    #[inline]
    #[must_use]
    pub const fn agent_cell(self) -> Cell {
        Cell::new(self.x, self.y)
    }

    /// Item slots at `(0, 0)` are used to mark items that no longer exist
    #[inline]
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// The maze layout
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    tiles: Texture<Tile>,
}

impl Grid {
    #[must_use]
    pub fn filled(height: usize, width: usize, tile: Tile) -> Self {
        Self {
            tiles: Texture::filled(width, height, tile),
        }
    }

    /// Build a grid from row-major tiles
    pub fn from_tiles(height: usize, width: usize, tiles: Vec<Tile>) -> Result<Self, RenderError> {
        if tiles.len() != height * width {
            return Err(RenderError::MaskSize {
                expected: height * width,
                found: tiles.len(),
                height,
                width,
            });
        }

        Ok(Self {
            tiles: Texture::from_data(tiles, width, height),
        })
    }

    /// Build a grid from a row-major numeric mask
    ///
    /// Cells equal to zero (`T::default()`) are walls, everything else is a passage.
    pub fn from_mask<T>(height: usize, width: usize, mask: &[T]) -> Result<Self, RenderError>
    where
        T: Copy + Default + PartialEq,
    {
        let tiles = mask
            .iter()
            .map(|&value| {
                if value == T::default() {
                    Tile::Wall
                } else {
                    Tile::Passage
                }
            })
            .collect();

        Self::from_tiles(height, width, tiles)
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.tiles.height()
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.tiles.width()
    }

    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        self.tiles.contains(cell.col, cell.row)
    }

    /// # Panics
    /// This function panics if the cell is outside of the grid
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles.get_pixel(cell.col, cell.row)
    }

    /// # Panics
    /// This function panics if the cell is outside of the grid
    pub fn set_tile(&mut self, cell: Cell, tile: Tile) {
        self.tiles.set_pixel(cell.col, cell.row, tile);
    }

    #[must_use]
    pub fn tiles(&self) -> &Texture<Tile> {
        &self.tiles
    }
}

/// Something that occupies a cell, used to report invalid coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Agent,
    Pursuer(usize),
    Item(usize),
    PowerItem(usize),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent => f.write_str("agent"),
            Self::Pursuer(slot) => write!(f, "pursuer {slot}"),
            Self::Item(index) => write!(f, "item {index}"),
            Self::PowerItem(index) => write!(f, "power item {index}"),
        }
    }
}

/// A finalized snapshot of the game
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    pub grid: Grid,

    /// `x` is the row, `y` the column
    pub agent: Position,

    /// `x` is the column, `y` the row
    pub pursuers: [Position; PURSUER_COUNT],

    /// `x` is the column, `y` the row
    pub items: Vec<Position>,

    /// `x` is the column, `y` the row
    pub power_items: Vec<Position>,

    /// Pursuers are scared while this is positive
    pub scared_timer: i32,

    /// Only used for the title, never rasterized
    pub score: u32,
}

impl GridState {
    /// Create a state without items
    ///
    /// Fails unless exactly [PURSUER_COUNT] pursuers are given.
    pub fn new(grid: Grid, agent: Position, pursuers: &[Position]) -> Result<Self, RenderError> {
        let pursuers = pursuers
            .try_into()
            .map_err(|_| RenderError::PursuerCount {
                expected: PURSUER_COUNT,
                found: pursuers.len(),
            })?;

        Ok(Self {
            grid,
            agent,
            pursuers,
            items: vec![],
            power_items: vec![],
            scared_timer: 0,
            score: 0,
        })
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<Position>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_power_items(mut self, power_items: Vec<Position>) -> Self {
        self.power_items = power_items;
        self
    }

    #[must_use]
    pub fn with_scared_timer(mut self, scared_timer: i32) -> Self {
        self.scared_timer = scared_timer;
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        Mode::from_scared_timer(self.scared_timer)
    }

    /// The title shown above a rendered frame
    #[must_use]
    pub fn title(&self) -> String {
        format!("PacMan    Score: {}", self.score)
    }

    /// Make sure that every entity lies within the grid
    pub fn check(&self) -> Result<CheckedState<'_>, RenderError> {
        if self.grid.height() == 0 || self.grid.width() == 0 {
            return Err(RenderError::EmptyGrid);
        }

        self.check_cell(Entity::Agent, self.agent.agent_cell())?;

        for (slot, pursuer) in self.pursuers.iter().enumerate() {
            self.check_cell(Entity::Pursuer(slot), pursuer.cell())?;
        }

        for (index, item) in self.items.iter().enumerate() {
            self.check_cell(Entity::Item(index), item.cell())?;
        }

        for (index, power_item) in self.power_items.iter().enumerate() {
            self.check_cell(Entity::PowerItem(index), power_item.cell())?;
        }

        Ok(CheckedState { state: self })
    }

    fn check_cell(&self, entity: Entity, cell: Cell) -> Result<(), RenderError> {
        if self.grid.contains(cell) {
            Ok(())
        } else {
            Err(RenderError::OutOfBounds {
                entity,
                row: cell.row,
                col: cell.col,
                height: self.grid.height(),
                width: self.grid.width(),
            })
        }
    }
}

/// A [GridState] whose entities are known to lie within its (non-empty) grid
#[derive(Clone, Copy, Debug)]
pub struct CheckedState<'a> {
    state: &'a GridState,
}

impl<'a> CheckedState<'a> {
    #[must_use]
    pub fn agent_cell(&self) -> Cell {
        self.state.agent.agent_cell()
    }

    pub fn pursuer_cells(&self) -> impl Iterator<Item = Cell> + 'a {
        self.state.pursuers.iter().map(|pursuer| pursuer.cell())
    }

    pub fn power_item_cells(&self) -> impl Iterator<Item = Cell> + 'a {
        self.state.power_items.iter().map(|item| item.cell())
    }
}

impl Deref for CheckedState<'_> {
    type Target = GridState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}
