//! The race track: a straight line of cells with snakes and ladders.
//!
//! Unlike the board, the track does not wrap. A move that would overshoot
//! the final cell is forfeited.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{GameError, LayoutViolation, Result};

/// A snake or a ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jump {
    Snake { from: usize, to: usize },
    Ladder { from: usize, to: usize },
}

impl Jump {
    #[must_use]
    pub fn start(&self) -> usize {
        match *self {
            Jump::Snake { from, .. } | Jump::Ladder { from, .. } => from,
        }
    }

    #[must_use]
    pub fn end(&self) -> usize {
        match *self {
            Jump::Snake { to, .. } | Jump::Ladder { to, .. } => to,
        }
    }
}

/// Validated race track.
#[derive(Clone, Debug, Default)]
pub struct Track {
    len: usize,
    jumps: FxHashMap<usize, Jump>,
}

fn reject(violation: LayoutViolation) -> GameError {
    warn!(%violation, "track layout rejected");
    GameError::InvalidBoardLayout(violation)
}

impl Track {
    /// Build a track of `len` cells.
    ///
    /// Fails with `InvalidBoardLayout` for fewer than 2 cells, a jump that
    /// leaves the track, starts on the first or last cell, points the wrong
    /// way, or shares its start with another jump.
    pub fn new(len: usize, jumps: impl IntoIterator<Item = Jump>) -> Result<Self> {
        if len < 2 {
            return Err(reject(LayoutViolation::TrackTooShort(len)));
        }

        let mut by_cell = FxHashMap::default();
        for jump in jumps {
            let (from, to) = (jump.start(), jump.end());
            if from >= len || to >= len {
                return Err(reject(LayoutViolation::JumpOutOfRange { from, to, len }));
            }
            if from == 0 || from == len - 1 {
                return Err(reject(LayoutViolation::JumpFromEndpoint(from)));
            }
            match jump {
                Jump::Snake { .. } if to >= from => {
                    return Err(reject(LayoutViolation::SnakeGoesUp { from, to }));
                }
                Jump::Ladder { .. } if to <= from => {
                    return Err(reject(LayoutViolation::LadderGoesDown { from, to }));
                }
                _ => {}
            }
            if by_cell.insert(from, jump).is_some() {
                return Err(reject(LayoutViolation::DuplicateJump(from)));
            }
        }

        Ok(Self {
            len,
            jumps: by_cell,
        })
    }

    /// A track with no snakes or ladders.
    pub fn plain(len: usize) -> Result<Self> {
        Self::new(len, std::iter::empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the winning cell.
    #[must_use]
    pub fn last_cell(&self) -> usize {
        self.len.saturating_sub(1)
    }

    #[must_use]
    pub fn jump_at(&self, cell: usize) -> Option<Jump> {
        self.jumps.get(&cell).copied()
    }

    /// Where a figure moving `steps` from `position` ends up, before any
    /// jump. Overshooting the final cell leaves it where it was.
    pub fn advance(&self, position: usize, steps: usize) -> Result<usize> {
        if position >= self.len {
            return Err(GameError::IndexOutOfBounds {
                index: position,
                len: self.len,
            });
        }
        match position.checked_add(steps) {
            Some(target) if target < self.len => Ok(target),
            _ => Ok(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_without_wrap() {
        let track = Track::plain(10).unwrap();
        assert_eq!(track.last_cell(), 9);
        assert_eq!(track.advance(3, 4).unwrap(), 7);
        assert_eq!(track.advance(6, 3).unwrap(), 9);
        // 7 + 5 overshoots 9
        assert_eq!(track.advance(7, 5).unwrap(), 7);
        assert!(matches!(
            track.advance(10, 1),
            Err(GameError::IndexOutOfBounds { index: 10, len: 10 })
        ));
    }

    #[test]
    fn test_jumps() {
        let track = Track::new(
            20,
            [
                Jump::Ladder { from: 3, to: 11 },
                Jump::Snake { from: 17, to: 4 },
            ],
        )
        .unwrap();

        assert_eq!(track.jump_at(3).map(|j| j.end()), Some(11));
        assert_eq!(track.jump_at(17).map(|j| j.end()), Some(4));
        assert_eq!(track.jump_at(5), None);
    }

    #[test]
    fn test_track_violations() {
        let cases = [
            (
                Track::plain(1).unwrap_err(),
                LayoutViolation::TrackTooShort(1),
            ),
            (
                Track::new(10, [Jump::Ladder { from: 2, to: 10 }]).unwrap_err(),
                LayoutViolation::JumpOutOfRange {
                    from: 2,
                    to: 10,
                    len: 10,
                },
            ),
            (
                Track::new(10, [Jump::Snake { from: 9, to: 1 }]).unwrap_err(),
                LayoutViolation::JumpFromEndpoint(9),
            ),
            (
                Track::new(10, [Jump::Snake { from: 4, to: 6 }]).unwrap_err(),
                LayoutViolation::SnakeGoesUp { from: 4, to: 6 },
            ),
            (
                Track::new(10, [Jump::Ladder { from: 4, to: 4 }]).unwrap_err(),
                LayoutViolation::LadderGoesDown { from: 4, to: 4 },
            ),
            (
                Track::new(
                    10,
                    [
                        Jump::Ladder { from: 4, to: 8 },
                        Jump::Snake { from: 4, to: 1 },
                    ],
                )
                .unwrap_err(),
                LayoutViolation::DuplicateJump(4),
            ),
        ];

        for (err, violation) in cases {
            assert_eq!(err, GameError::InvalidBoardLayout(violation));
        }
    }
}
