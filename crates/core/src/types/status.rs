//! Status enums for commerce entities.

use serde::{Deserialize, Serialize};

/// Inventory stock status for a product or variant.
///
/// Maps to the commerce system's stock status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockStatus {
    InStock,
    #[default]
    OutOfStock,
    PreOrderable,
    BackOrderable,
}

impl StockStatus {
    /// Name of the status as shown to shoppers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
            Self::PreOrderable => "Pre-Orderable",
            Self::BackOrderable => "Back-Orderable",
        }
    }

    /// Whether the item can be added to a cart right now.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "InStock"),
            Self::OutOfStock => write!(f, "OutOfStock"),
            Self::PreOrderable => write!(f, "PreOrderable"),
            Self::BackOrderable => write!(f, "BackOrderable"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InStock" => Ok(Self::InStock),
            "OutOfStock" => Ok(Self::OutOfStock),
            "PreOrderable" => Ok(Self::PreOrderable),
            "BackOrderable" => Ok(Self::BackOrderable),
            _ => Err(format!("invalid stock status: {s}")),
        }
    }
}
