//! The validated board.
//!
//! A `Board` is immutable once built. Construction checks the corner
//! invariant and normalizes the tile order: play starts on the bottom-right
//! corner at index 0, and the bottom-left, top-left and top-right corners
//! follow at `N/4`, `N/2` and `3N/4`. Edge tiles keep their relative order.
//!
//! ```
//! use rust_boardgame::board::{Board, BoardCorner, CornerKind, Tile};
//!
//! let board = Board::layout_from_tiles(vec![
//!     Tile::corner(CornerKind::Start, BoardCorner::BottomRight),
//!     Tile::corner(CornerKind::Jail, BoardCorner::BottomLeft),
//!     Tile::corner(CornerKind::FreeParking, BoardCorner::TopLeft),
//!     Tile::corner(CornerKind::GoToJail, BoardCorner::TopRight),
//! ])
//! .unwrap();
//!
//! assert_eq!(board.len(), 4);
//! assert_eq!(board.position_of(CornerKind::Jail), 1);
//! assert_eq!(board.position_after_steps(3, 2).unwrap(), 1);
//! ```

use tracing::{debug, warn};

use super::tile::{BoardCorner, CornerKind, Tile};
use crate::core::{GameError, LayoutViolation, Result};

/// Ordered, validated ring of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    /// Index of each corner kind, in `CornerKind` declaration order.
    corner_positions: [usize; 4],
}

fn kind_slot(kind: CornerKind) -> usize {
    match kind {
        CornerKind::Start => 0,
        CornerKind::Jail => 1,
        CornerKind::FreeParking => 2,
        CornerKind::GoToJail => 3,
    }
}

fn reject(violation: LayoutViolation) -> GameError {
    warn!(%violation, "board layout rejected");
    GameError::InvalidBoardLayout(violation)
}

impl Board {
    /// Validate `tiles` and lay them out around the board.
    ///
    /// Fails with `InvalidBoardLayout` when there are fewer than 4 tiles,
    /// a tax outside `0..=100`, not exactly 4 corners, a repeated corner kind
    /// or corner position, or edge tiles that cannot be split evenly over the
    /// 4 sides.
    pub fn layout_from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        let len = tiles.len();
        if len < 4 {
            return Err(reject(LayoutViolation::TooFewTiles(len)));
        }

        let mut kinds: [Option<usize>; 4] = [None; 4];
        let mut corners: [Option<usize>; 4] = [None; 4];
        let mut corner_count = 0;

        for (index, tile) in tiles.iter().enumerate() {
            let (kind, corner) = match *tile {
                Tile::Corner { kind, corner } => (kind, corner),
                Tile::Tax { percentage } if !(0..=100).contains(&percentage) => {
                    return Err(reject(LayoutViolation::TaxOutOfRange { index, percentage }));
                }
                _ => continue,
            };
            corner_count += 1;
            if corner_count > 4 {
                continue;
            }
            if kinds[kind_slot(kind)].replace(index).is_some() {
                return Err(reject(LayoutViolation::DuplicateCornerKind(kind.to_string())));
            }
            if corners[corner.quarter()].replace(index).is_some() {
                return Err(reject(LayoutViolation::DuplicateCornerPosition(
                    corner.to_string(),
                )));
            }
        }

        if corner_count != 4 {
            return Err(reject(LayoutViolation::CornerCount(corner_count)));
        }
        let edge_tiles = len - 4;
        if edge_tiles % 4 != 0 {
            return Err(reject(LayoutViolation::NotSquare { edge_tiles }));
        }

        let tiles = Self::normalize(tiles, &corners);
        let mut corner_positions = [0; 4];
        for (index, tile) in tiles.iter().enumerate() {
            if let Some(kind) = tile.corner_kind() {
                corner_positions[kind_slot(kind)] = index;
            }
        }

        debug!(tiles = len, "board laid out");
        Ok(Self {
            tiles,
            corner_positions,
        })
    }

    /// Rotate so reading starts at the bottom-right corner, then put each
    /// corner on its quarter and fill the remaining slots in reading order.
    fn normalize(tiles: Vec<Tile>, corners: &[Option<usize>; 4]) -> Vec<Tile> {
        let len = tiles.len();
        let side = len / 4;
        let origin = corners[BoardCorner::BottomRight.quarter()].unwrap_or(0);

        let mut slots: Vec<Option<Tile>> = vec![None; len];
        let mut edges = Vec::with_capacity(len - 4);
        for offset in 0..len {
            let tile = tiles[(origin + offset) % len];
            match tile {
                Tile::Corner { corner, .. } => slots[corner.quarter() * side] = Some(tile),
                _ => edges.push(tile),
            }
        }

        let mut edges = edges.into_iter();
        slots
            .into_iter()
            .filter_map(|slot| slot.or_else(|| edges.next()))
            .collect()
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in play order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `position`. Fails with `IndexOutOfBounds` outside `[0, N)`.
    pub fn tile_at(&self, position: usize) -> Result<&Tile> {
        self.tiles.get(position).ok_or(GameError::IndexOutOfBounds {
            index: position,
            len: self.tiles.len(),
        })
    }

    /// Position reached from `position` after `steps`, wrapping modulo `N`.
    ///
    /// Detecting a pass over index 0 is up to the caller.
    pub fn position_after_steps(&self, position: usize, steps: usize) -> Result<usize> {
        self.tile_at(position)?;
        Ok((position + steps % self.tiles.len()) % self.tiles.len())
    }

    /// Tile reached from `position` after `steps`.
    pub fn tile_after_steps(&self, position: usize, steps: usize) -> Result<&Tile> {
        let target = self.position_after_steps(position, steps)?;
        self.tile_at(target)
    }

    /// Index of the corner tile of `kind`.
    #[must_use]
    pub fn position_of(&self, kind: CornerKind) -> usize {
        self.corner_positions[kind_slot(kind)]
    }

    #[must_use]
    pub fn jail_position(&self) -> usize {
        self.position_of(CornerKind::Jail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::AssetId;

    fn corners() -> [Tile; 4] {
        [
            Tile::corner(CornerKind::Start, BoardCorner::BottomRight),
            Tile::corner(CornerKind::Jail, BoardCorner::BottomLeft),
            Tile::corner(CornerKind::FreeParking, BoardCorner::TopLeft),
            Tile::corner(CornerKind::GoToJail, BoardCorner::TopRight),
        ]
    }

    /// Ring of 8 edge tiles between the corners, in play order.
    fn twelve_tiles() -> Vec<Tile> {
        let [start, jail, parking, go_to_jail] = corners();
        vec![
            start,
            Tile::Ownable(AssetId(0)),
            Tile::Tax { percentage: 10 },
            jail,
            Tile::Ownable(AssetId(1)),
            Tile::Ownable(AssetId(2)),
            parking,
            Tile::Ownable(AssetId(3)),
            Tile::Tax { percentage: 20 },
            go_to_jail,
            Tile::Ownable(AssetId(4)),
            Tile::Ownable(AssetId(5)),
        ]
    }

    #[test]
    fn test_ordered_input_is_kept() {
        let tiles = twelve_tiles();
        let board = Board::layout_from_tiles(tiles.clone()).unwrap();

        assert_eq!(board.tiles(), tiles.as_slice());
        assert_eq!(board.position_of(CornerKind::Start), 0);
        assert_eq!(board.jail_position(), 3);
        assert_eq!(board.position_of(CornerKind::FreeParking), 6);
        assert_eq!(board.position_of(CornerKind::GoToJail), 9);
    }

    #[test]
    fn test_rotated_input_is_normalized() {
        let mut tiles = twelve_tiles();
        tiles.rotate_left(5);

        let board = Board::layout_from_tiles(tiles).unwrap();
        assert_eq!(board.tiles(), twelve_tiles().as_slice());
    }

    #[test]
    fn test_corners_moved_to_quarters() {
        let [start, jail, parking, go_to_jail] = corners();
        let edge = Tile::Ownable(AssetId(0));
        let tiles = vec![start, jail, parking, go_to_jail, edge, edge, edge, edge];

        let board = Board::layout_from_tiles(tiles).unwrap();
        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.is_corner(), i % 2 == 0, "tile {i}");
        }
        assert_eq!(board.position_of(CornerKind::GoToJail), 6);
    }

    #[test]
    fn test_layout_violations() {
        let [start, jail, parking, _] = corners();

        assert_eq!(
            Board::layout_from_tiles(vec![start, jail]),
            Err(GameError::InvalidBoardLayout(LayoutViolation::TooFewTiles(2)))
        );

        let three = vec![start, jail, parking, Tile::Tax { percentage: 5 }];
        assert_eq!(
            Board::layout_from_tiles(three),
            Err(GameError::InvalidBoardLayout(LayoutViolation::CornerCount(3)))
        );

        let dup_kind = vec![
            start,
            jail,
            parking,
            Tile::corner(CornerKind::Start, BoardCorner::TopRight),
        ];
        assert!(matches!(
            Board::layout_from_tiles(dup_kind),
            Err(GameError::InvalidBoardLayout(
                LayoutViolation::DuplicateCornerKind(_)
            ))
        ));

        let dup_corner = vec![
            start,
            jail,
            parking,
            Tile::corner(CornerKind::GoToJail, BoardCorner::TopLeft),
        ];
        assert!(matches!(
            Board::layout_from_tiles(dup_corner),
            Err(GameError::InvalidBoardLayout(
                LayoutViolation::DuplicateCornerPosition(_)
            ))
        ));

        let mut lopsided = corners().to_vec();
        lopsided.push(Tile::Tax { percentage: 5 });
        assert_eq!(
            Board::layout_from_tiles(lopsided),
            Err(GameError::InvalidBoardLayout(LayoutViolation::NotSquare {
                edge_tiles: 1
            }))
        );
    }

    #[test]
    fn test_tax_outside_percent_range_rejected() {
        for percentage in [150, -10] {
            let mut tiles = twelve_tiles();
            tiles[2] = Tile::Tax { percentage };
            assert_eq!(
                Board::layout_from_tiles(tiles),
                Err(GameError::InvalidBoardLayout(LayoutViolation::TaxOutOfRange {
                    index: 2,
                    percentage
                }))
            );
        }

        let mut tiles = twelve_tiles();
        tiles[2] = Tile::Tax { percentage: 100 };
        tiles[8] = Tile::Tax { percentage: 0 };
        assert!(Board::layout_from_tiles(tiles).is_ok());
    }

    #[test]
    fn test_tile_lookup() {
        let board = Board::layout_from_tiles(twelve_tiles()).unwrap();

        assert_eq!(*board.tile_at(2).unwrap(), Tile::Tax { percentage: 10 });
        assert_eq!(
            board.tile_at(12),
            Err(GameError::IndexOutOfBounds { index: 12, len: 12 })
        );
        assert_eq!(board.position_after_steps(10, 4).unwrap(), 2);
        assert_eq!(board.position_after_steps(5, 12).unwrap(), 5);
        assert_eq!(board.tile_after_steps(11, 1).unwrap().corner_kind(), Some(CornerKind::Start));
        assert!(board.position_after_steps(12, 1).is_err());
    }
}
