//! Plain text level files
//!
//! A level holds one or more snapshots separated by a line containing `---`.
//! Every snapshot may start with `score N` and `scared N` headers, followed
//! by the maze rows:
//!
//! | Character   | Meaning            |
//! |-------------|--------------------|
//! | `#`         | wall               |
//! | ` ` or `_`  | passage            |
//! | `.`         | item               |
//! | `o`         | power item         |
//! | `P`         | agent              |
//! | `0` to `3`  | pursuer slot       |
//!
//! Everything except walls sits on a passage.

use error_derive::Error;
use render::{Cell, Grid, GridState, Position, RenderError, Tile, PURSUER_COUNT};

const SEPARATOR: &str = "---";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    #[msg = "line {line}: unexpected character {character:?} in column {column}"]
    UnknownTile {
        line: usize,
        column: usize,
        character: char,
    },

    #[msg = "line {line}: row has width {found}, expected {expected}"]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[msg = "line {line}: invalid value {value:?} for {header:?}"]
    InvalidHeader {
        line: usize,
        header: String,
        value: String,
    },

    #[msg = "line {line}: the agent was already placed"]
    DuplicateAgent { line: usize },

    #[msg = "line {line}: pursuer {slot} was already placed"]
    DuplicatePursuer { line: usize, slot: usize },

    #[msg = "snapshot {snapshot} has no maze rows"]
    EmptyMaze { snapshot: usize },

    #[msg = "snapshot {snapshot} does not place the agent"]
    MissingAgent { snapshot: usize },

    #[msg = "snapshot {snapshot} does not place pursuer {slot}"]
    MissingPursuer { snapshot: usize, slot: usize },

    #[msg = "the level does not contain any snapshots"]
    NoSnapshots,

    #[msg = "snapshot is not renderable"]
    Render(RenderError),
}

/// Parse every snapshot of a level, in order
pub fn parse(source: &str) -> Result<Vec<GridState>, LevelError> {
    let mut snapshots = vec![];
    let mut builder = SnapshotBuilder::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim_end_matches('\r');

        if line.trim() == SEPARATOR {
            let snapshot = std::mem::take(&mut builder).finish(snapshots.len() + 1)?;
            snapshots.push(snapshot);
            continue;
        }

        builder.push_line(line_number, line)?;
    }

    if !builder.is_blank() {
        snapshots.push(builder.finish(snapshots.len() + 1)?);
    }

    if snapshots.is_empty() {
        return Err(LevelError::NoSnapshots);
    }

    log::debug!("Parsed {} snapshot(s)", snapshots.len());
    Ok(snapshots)
}

#[derive(Debug, Default)]
struct SnapshotBuilder {
    score: u32,
    scared_timer: i32,
    has_headers: bool,
    width: usize,
    rows: usize,
    walls: Vec<Cell>,
    agent: Option<Position>,
    pursuers: [Option<Position>; PURSUER_COUNT],
    items: Vec<Position>,
    power_items: Vec<Position>,
}

impl SnapshotBuilder {
    fn is_blank(&self) -> bool {
        self.rows == 0 && !self.has_headers
    }

    fn push_line(&mut self, line_number: usize, line: &str) -> Result<(), LevelError> {
        if line.is_empty() {
            return Ok(());
        }

        // Headers are only allowed above the maze
        if self.rows == 0 {
            if let Some((header, value)) = line.split_once(' ') {
                match header {
                    "score" => {
                        self.score = parse_header(line_number, header, value)?;
                        self.has_headers = true;
                        return Ok(());
                    },
                    "scared" => {
                        self.scared_timer = parse_header(line_number, header, value)?;
                        self.has_headers = true;
                        return Ok(());
                    },
                    _ => {},
                }
            }
        }

        self.push_row(line_number, line)
    }

    fn push_row(&mut self, line_number: usize, line: &str) -> Result<(), LevelError> {
        let width = line.chars().count();
        if self.rows == 0 {
            self.width = width;
        } else if width != self.width {
            return Err(LevelError::RaggedRow {
                line: line_number,
                expected: self.width,
                found: width,
            });
        }

        let row = self.rows;
        for (col, character) in line.chars().enumerate() {
            // The agent is addressed as (row, column), everything else as (column, row)
            match character {
                '#' => self.walls.push(Cell::new(row, col)),
                ' ' | '_' => {},
                '.' => self.items.push(Position::new(col, row)),
                'o' => self.power_items.push(Position::new(col, row)),
                'P' => {
                    if self.agent.is_some() {
                        return Err(LevelError::DuplicateAgent { line: line_number });
                    }
                    self.agent = Some(Position::new(row, col));
                },
                '0'..='3' => {
                    let slot = usize::from(character as u8 - b'0');
                    let pursuer = &mut self.pursuers[slot];
                    if pursuer.is_some() {
                        return Err(LevelError::DuplicatePursuer {
                            line: line_number,
                            slot,
                        });
                    }
                    *pursuer = Some(Position::new(col, row));
                },
                _ => {
                    return Err(LevelError::UnknownTile {
                        line: line_number,
                        column: col + 1,
                        character,
                    })
                },
            }
        }

        self.rows += 1;
        Ok(())
    }

    fn finish(self, snapshot: usize) -> Result<GridState, LevelError> {
        if self.rows == 0 {
            return Err(LevelError::EmptyMaze { snapshot });
        }

        let agent = self.agent.ok_or(LevelError::MissingAgent { snapshot })?;

        let mut pursuers = [Position::default(); PURSUER_COUNT];
        for (slot, pursuer) in self.pursuers.into_iter().enumerate() {
            pursuers[slot] = pursuer.ok_or(LevelError::MissingPursuer { snapshot, slot })?;
        }

        let mut grid = Grid::filled(self.rows, self.width, Tile::Passage);
        for wall in self.walls {
            grid.set_tile(wall, Tile::Wall);
        }

        let state = GridState::new(grid, agent, &pursuers)?
            .with_items(self.items)
            .with_power_items(self.power_items)
            .with_scared_timer(self.scared_timer)
            .with_score(self.score);

        Ok(state)
    }
}

fn parse_header<T: std::str::FromStr>(
    line: usize,
    header: &str,
    value: &str,
) -> Result<T, LevelError> {
    value.trim().parse().map_err(|_| LevelError::InvalidHeader {
        line,
        header: header.to_string(),
        value: value.to_string(),
    })
}
