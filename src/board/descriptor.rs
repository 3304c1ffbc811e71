//! Board construction from flat tile descriptors.
//!
//! Hosts load descriptor lists from their own storage and hand them to
//! [`build_board`], which registers the assets and lays out the tiles.
//! A malformed descriptor fails the same way as an invalid layout.
//!
//! ```
//! use rust_boardgame::board::{build_board, TileDescriptor};
//!
//! let json = r#"[
//!     {"kind": "corner", "corner_kind": "Start", "corner": "BottomRight"},
//!     {"kind": "corner", "corner_kind": "Jail", "corner": "BottomLeft"},
//!     {"kind": "corner", "corner_kind": "FreeParking", "corner": "TopLeft"},
//!     {"kind": "corner", "corner_kind": "GoToJail", "corner": "TopRight"}
//! ]"#;
//! let descriptors: Vec<TileDescriptor> = serde_json::from_str(json).unwrap();
//!
//! let (board, assets) = build_board(&descriptors).unwrap();
//! assert_eq!(board.len(), 4);
//! assert!(assets.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::layout::Board;
use super::tile::{BoardCorner, CornerKind, Tile};
use crate::core::{GameError, LayoutViolation, Result};
use crate::economy::{AssetRegistry, ColorGroup};

/// One tile as supplied by the board factory input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileDescriptor {
    Corner {
        corner_kind: CornerKind,
        corner: BoardCorner,
    },
    Property {
        name: String,
        color: ColorGroup,
        price: i64,
    },
    Railroad {
        name: String,
        price: i64,
    },
    Utility {
        name: String,
        price: i64,
    },
    Tax {
        percentage: i64,
    },
}

impl TileDescriptor {
    pub fn property(name: impl Into<String>, color: ColorGroup, price: i64) -> Self {
        Self::Property {
            name: name.into(),
            color,
            price,
        }
    }

    pub fn railroad(name: impl Into<String>, price: i64) -> Self {
        Self::Railroad {
            name: name.into(),
            price,
        }
    }

    pub fn utility(name: impl Into<String>, price: i64) -> Self {
        Self::Utility {
            name: name.into(),
            price,
        }
    }

    #[must_use]
    pub fn corner(corner_kind: CornerKind, corner: BoardCorner) -> Self {
        Self::Corner {
            corner_kind,
            corner,
        }
    }

    #[must_use]
    pub fn tax(percentage: i64) -> Self {
        Self::Tax { percentage }
    }
}

fn malformed(index: usize, reason: impl Into<String>) -> GameError {
    GameError::InvalidBoardLayout(LayoutViolation::MalformedDescriptor {
        index,
        reason: reason.into(),
    })
}

/// Register every asset of `descriptors` and lay out the board.
pub fn build_board(descriptors: &[TileDescriptor]) -> Result<(Board, AssetRegistry)> {
    let mut registry = AssetRegistry::new();
    let mut tiles = Vec::with_capacity(descriptors.len());

    for (index, descriptor) in descriptors.iter().enumerate() {
        let registered = match descriptor {
            TileDescriptor::Corner {
                corner_kind,
                corner,
            } => Ok(Tile::corner(*corner_kind, *corner)),
            TileDescriptor::Property { name, color, price } => registry
                .add_property(name.as_str(), *color, *price)
                .map(Tile::Ownable),
            TileDescriptor::Railroad { name, price } => {
                registry.add_railroad(name.as_str(), *price).map(Tile::Ownable)
            }
            TileDescriptor::Utility { name, price } => {
                registry.add_utility(name.as_str(), *price).map(Tile::Ownable)
            }
            TileDescriptor::Tax { percentage } if (0..=100).contains(percentage) => {
                Ok(Tile::Tax {
                    percentage: *percentage,
                })
            }
            TileDescriptor::Tax { percentage } => Err(GameError::invalid_argument(format!(
                "tax percentage must be within 0..=100, got {percentage}"
            ))),
        };

        let tile = registered.map_err(|err| match err {
            GameError::InvalidArgument(reason) => malformed(index, reason),
            other => other,
        })?;
        tiles.push(tile);
    }

    let board = Board::layout_from_tiles(tiles)?;
    Ok((board, registry))
}

/// The standard 40-tile board.
///
/// The six card cells of the printed board carry a 5% levy instead, since
/// card decks are not part of the engine.
#[must_use]
pub fn classic_descriptors() -> Vec<TileDescriptor> {
    use ColorGroup::*;
    use TileDescriptor as T;

    const CARD_LEVY: i64 = 5;

    vec![
        T::corner(CornerKind::Start, BoardCorner::BottomRight),
        T::property("Mediterranean Avenue", Brown, 60),
        T::tax(CARD_LEVY),
        T::property("Baltic Avenue", Brown, 60),
        T::tax(10),
        T::railroad("Reading Railroad", 200),
        T::property("Oriental Avenue", LightBlue, 100),
        T::tax(CARD_LEVY),
        T::property("Vermont Avenue", LightBlue, 100),
        T::property("Connecticut Avenue", LightBlue, 120),
        T::corner(CornerKind::Jail, BoardCorner::BottomLeft),
        T::property("St. Charles Place", Pink, 140),
        T::utility("Electric Company", 150),
        T::property("States Avenue", Pink, 140),
        T::property("Virginia Avenue", Pink, 160),
        T::railroad("Pennsylvania Railroad", 200),
        T::property("St. James Place", Orange, 180),
        T::tax(CARD_LEVY),
        T::property("Tennessee Avenue", Orange, 180),
        T::property("New York Avenue", Orange, 200),
        T::corner(CornerKind::FreeParking, BoardCorner::TopLeft),
        T::property("Kentucky Avenue", Red, 220),
        T::tax(CARD_LEVY),
        T::property("Indiana Avenue", Red, 220),
        T::property("Illinois Avenue", Red, 240),
        T::railroad("B&O Railroad", 200),
        T::property("Atlantic Avenue", Yellow, 260),
        T::property("Ventnor Avenue", Yellow, 260),
        T::utility("Water Works", 150),
        T::property("Marvin Gardens", Yellow, 280),
        T::corner(CornerKind::GoToJail, BoardCorner::TopRight),
        T::property("Pacific Avenue", Green, 300),
        T::property("North Carolina Avenue", Green, 300),
        T::tax(CARD_LEVY),
        T::property("Pennsylvania Avenue", Green, 320),
        T::railroad("Short Line", 200),
        T::tax(CARD_LEVY),
        T::property("Park Place", DarkBlue, 350),
        T::tax(15),
        T::property("Boardwalk", DarkBlue, 400),
    ]
}

/// Build the standard 40-tile board and its assets.
pub fn classic_board() -> Result<(Board, AssetRegistry)> {
    build_board(&classic_descriptors())
}
