//! Navigation on an integer grid, producing the trails that get plotted
//!
//! The navigator starts at the origin facing north and follows a list of
//! [`Instruction`]s. Walking records every position it lands on; jumping
//! skips ahead without leaving tracks and starts a new trail at the landing
//! position. The recorded trails come out as a trace ready for
//! [`build_segments`](crate::modules::group::build_segments).
//!
//! # Example
//!
//! ```rust
//! use snow_trail::modules::navigate::{Heading, Instruction, Navigator};
//! use snow_trail::pt;
//!
//! let mut nav = Navigator::new();
//! nav.run(&[
//!     Instruction::Turn(90),
//!     Instruction::Walk(6),
//!     Instruction::Jump(2),
//!     Instruction::Turn(-45),
//!     Instruction::Walk(2),
//! ])
//! .unwrap();
//!
//! assert_eq!(nav.position(), pt!(10, 2));
//! assert_eq!(nav.heading(), Heading::NorthEast);
//! assert_eq!(nav.manhattan_distance(), 12);
//! ```

use crate::data::{Point, TraceEntry};
use crate::error::{TraceError, TraceResult};
use log::{debug, trace};

/// Compass heading in 45 degree steps, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    const ALL: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    /// Grid offset of a single step in this direction
    pub fn offset(self) -> Point {
        match self {
            Heading::North => Point::new(0, 1),
            Heading::NorthEast => Point::new(1, 1),
            Heading::East => Point::new(1, 0),
            Heading::SouthEast => Point::new(1, -1),
            Heading::South => Point::new(0, -1),
            Heading::SouthWest => Point::new(-1, -1),
            Heading::West => Point::new(-1, 0),
            Heading::NorthWest => Point::new(-1, 1),
        }
    }

    /// Turn clockwise by `degrees` (negative turns counter-clockwise).
    ///
    /// Angles are reduced modulo 360 first; the remainder that is not a
    /// multiple of 45 degrees is dropped.
    pub fn turn(self, degrees: i32) -> Heading {
        let steps = (degrees.rem_euclid(360) / 45) as usize;
        Self::ALL[(self as usize + steps) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turn by the given number of degrees
    Turn(i32),
    /// Take this many steps, leaving a track on each
    Walk(u32),
    /// Leap this many steps ahead without leaving tracks
    Jump(u32),
}

#[derive(Debug, Clone)]
pub struct Navigator {
    position: Point,
    heading: Heading,
    finished: Vec<Vec<Point>>,
    current: Vec<Point>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at the origin facing north with one open, empty trail
    pub fn new() -> Self {
        Self {
            position: Point::ORIGIN,
            heading: Heading::North,
            finished: Vec::new(),
            current: Vec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Manhattan distance from the origin to the current position
    pub fn manhattan_distance(&self) -> u32 {
        Point::ORIGIN.manhattan_distance(&self.position)
    }

    /// Follow one instruction.
    ///
    /// Fails with [`TraceError::OutOfRange`] before moving if the target
    /// position does not fit the i32 grid; the navigator is left unchanged.
    pub fn apply(&mut self, instruction: Instruction) -> TraceResult<()> {
        trace!("{:?} at {} facing {:?}", instruction, self.position, self.heading);

        match instruction {
            Instruction::Turn(degrees) => self.heading = self.heading.turn(degrees),
            Instruction::Walk(steps) => {
                let offset = self.heading.offset();
                // every step lies between here and the checked target
                self.target(offset, steps)?;
                for _ in 0..steps {
                    self.position = self.position + offset;
                    self.current.push(self.position);
                }
            }
            Instruction::Jump(steps) => {
                self.position = self.target(self.heading.offset(), steps)?;
                let finished = std::mem::replace(&mut self.current, vec![self.position]);
                self.finished.push(finished);
            }
        }
        Ok(())
    }

    /// Position reached after `steps` steps of `offset`
    fn target(&self, offset: Point, steps: u32) -> TraceResult<Point> {
        offset
            .checked_scaled(steps)
            .and_then(|delta| self.position.checked_add(delta))
            .ok_or(TraceError::OutOfRange {
                from: self.position,
                offset,
                steps,
            })
    }

    /// Follow instructions in order, stopping at the first one that fails
    pub fn run(&mut self, instructions: &[Instruction]) -> TraceResult<()> {
        for instruction in instructions {
            self.apply(*instruction)?;
        }
        debug!(
            "navigation ended at {} after {} trails, distance {}",
            self.position,
            self.finished.len() + 1,
            self.manhattan_distance()
        );
        Ok(())
    }

    /// Every trail recorded so far, the open one last
    pub fn trails(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.finished
            .iter()
            .map(Vec::as_slice)
            .chain(std::iter::once(self.current.as_slice()))
    }

    /// The recorded trails as a trace, each trail preceded by a boundary
    pub fn trail_entries(&self) -> Vec<TraceEntry> {
        self.trails()
            .flat_map(|trail| {
                std::iter::once(TraceEntry::EndOfSegment)
                    .chain(trail.iter().copied().map(TraceEntry::Point))
            })
            .collect()
    }
}
