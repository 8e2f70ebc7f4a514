//! Fixed ASCII layouts.
//!
//! A layout is a square block of glyphs, one row per line:
//!
//! | glyph | tile |
//! |---|---|
//! | `.` | open floor |
//! | `#` | obstacle |
//! | `S` | start (exactly one) |
//! | `E` | end (exactly one) |
//! | `*` | route, read back as open floor |
//!
//! Blank lines before and after the block and whitespace around each row
//! are ignored, so layouts can be written as indented string literals.

use pathstep_core::{Grid, Point, TileState};

/// Errors produced while parsing or applying a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("layout row {row} has {width} columns, expected {expected}")]
    NotSquare {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        row: usize,
        column: usize,
        glyph: char,
    },
    #[error("layout has no start tile")]
    MissingStart,
    #[error("layout has no end tile")]
    MissingEnd,
    #[error("layout has a second {state:?} tile at {at}, first one at {first}")]
    Duplicate {
        state: TileState,
        first: Point,
        at: Point,
    },
    #[error("layout is {0}x{0}, the minimum is 3x3")]
    TooSmall(usize),
    #[error("layout is {layout}x{layout} but the grid is {grid}x{grid}")]
    DimensionMismatch { layout: i32, grid: i32 },
}

/// A parsed, validated map layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    dimension: i32,
    states: Vec<TileState>,
    start: Point,
    goal: Point,
}

impl Layout {
    /// The hand-drawn 16x16 demo map.
    pub const CLASSIC: &'static str = "
        ......#.........
        ......#...E.....
        ......#.........
        ......#######...
        ......#.....#.##
        ....###.....#...
        ............##.#
        ............#...
        ................
        ............#...
        ....######..#...
        ................
        .####..#........
        .#.S...#........
        .#.....#........
        .#.....#........
    ";

    /// Parse a layout from text.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows: &[&str] = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(LayoutError::Empty),
        };

        let n = rows.len();
        if n < 3 {
            return Err(LayoutError::TooSmall(n));
        }

        let mut states = Vec::with_capacity(n * n);
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != n {
                return Err(LayoutError::NotSquare {
                    row: y,
                    width,
                    expected: n,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let state = TileState::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph {
                    row: y,
                    column: x,
                    glyph,
                })?;
                let slot = match state {
                    TileState::Start => Some(&mut start),
                    TileState::End => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if let Some(first) = *slot {
                        return Err(LayoutError::Duplicate { state, first, at: p });
                    }
                    *slot = Some(p);
                }
                states.push(match state {
                    TileState::Route => TileState::Unexplored,
                    s => s,
                });
            }
        }

        Ok(Self {
            dimension: n as i32,
            states,
            start: start.ok_or(LayoutError::MissingStart)?,
            goal: goal.ok_or(LayoutError::MissingEnd)?,
        })
    }

    /// Side length of the layout.
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Stamp the layout onto `grid` and return `(start, goal)`.
    pub fn apply(&self, grid: &mut Grid) -> Result<(Point, Point), LayoutError> {
        if grid.dimension() != self.dimension {
            return Err(LayoutError::DimensionMismatch {
                layout: self.dimension,
                grid: grid.dimension(),
            });
        }
        for (p, &state) in grid.bounds().iter().zip(&self.states) {
            grid.set_state(p, state);
        }
        Ok((self.start, self.goal))
    }

    /// Render `grid` as layout text, one row per line.
    pub fn render(grid: &Grid) -> String {
        let n = grid.dimension().max(0) as usize;
        let mut out = String::with_capacity(n * (n + 1));
        for (i, t) in grid.iter().enumerate() {
            out.push(t.state.glyph());
            if (i + 1) % n == 0 {
                out.push('\n');
            }
        }
        out
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
