//! Loyalty program entities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer's loyalty card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoyaltyCard {
    /// Identifier assigned by the commerce system.
    pub external_id: String,
    /// Printed card number.
    pub card_number: String,
    /// Owning customer.
    pub customer_id: String,
    /// Shop the card was issued for.
    pub shop_name: String,
    /// Loyalty programs the card is enrolled in.
    pub program_ids: Vec<String>,
    /// Point balances per reward point type.
    pub reward_points: Vec<LoyaltyRewardPoint>,
}

/// A reward point balance on a loyalty card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoyaltyRewardPoint {
    /// Reward point identifier.
    pub reward_point_id: String,
    /// Human-readable description.
    pub description: String,
    /// Kind of points (e.g. "Redeemable", "Non-redeemable").
    pub reward_point_type: String,
    /// Points currently available.
    pub active_points: Decimal,
    /// Points issued over the card's lifetime.
    pub issued_points: Decimal,
    /// Points already redeemed.
    pub used_points: Decimal,
    /// Points that expired before use.
    pub expired_points: Decimal,
    /// Currency the points are denominated in, if any.
    pub currency_code: Option<String>,
}
