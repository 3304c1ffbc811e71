//! Board tiles.

use serde::{Deserialize, Serialize};

use crate::economy::AssetId;

/// The four structural corner kinds. Each appears exactly once per board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerKind {
    Start,
    Jail,
    FreeParking,
    GoToJail,
}

impl std::fmt::Display for CornerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CornerKind::Start => "Start",
            CornerKind::Jail => "Jail",
            CornerKind::FreeParking => "Free Parking",
            CornerKind::GoToJail => "Go To Jail",
        };
        f.write_str(name)
    }
}

/// Physical corner a corner tile sits on.
///
/// Play runs counter-clockwise from the bottom-right corner, so the corners
/// are visited in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardCorner {
    BottomRight,
    BottomLeft,
    TopLeft,
    TopRight,
}

impl BoardCorner {
    /// Corners in the order play reaches them.
    pub const ROTATION: [BoardCorner; 4] = [
        BoardCorner::BottomRight,
        BoardCorner::BottomLeft,
        BoardCorner::TopLeft,
        BoardCorner::TopRight,
    ];

    /// Which quarter of the board this corner opens (0-3).
    #[must_use]
    pub fn quarter(self) -> usize {
        match self {
            BoardCorner::BottomRight => 0,
            BoardCorner::BottomLeft => 1,
            BoardCorner::TopLeft => 2,
            BoardCorner::TopRight => 3,
        }
    }
}

impl std::fmt::Display for BoardCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoardCorner::BottomRight => "bottom-right",
            BoardCorner::BottomLeft => "bottom-left",
            BoardCorner::TopLeft => "top-left",
            BoardCorner::TopRight => "top-right",
        };
        f.write_str(name)
    }
}

/// One cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Corner { kind: CornerKind, corner: BoardCorner },
    /// A purchasable asset, defined in the board's `AssetRegistry`.
    Ownable(AssetId),
    /// Pay `percentage` of the current balance.
    Tax { percentage: i64 },
}

impl Tile {
    #[must_use]
    pub const fn corner(kind: CornerKind, corner: BoardCorner) -> Self {
        Tile::Corner { kind, corner }
    }

    #[must_use]
    pub fn is_corner(&self) -> bool {
        matches!(self, Tile::Corner { .. })
    }

    /// The corner kind, if this is a corner tile.
    #[must_use]
    pub fn corner_kind(&self) -> Option<CornerKind> {
        match self {
            Tile::Corner { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn asset(&self) -> Option<AssetId> {
        match self {
            Tile::Ownable(id) => Some(*id),
            _ => None,
        }
    }
}
