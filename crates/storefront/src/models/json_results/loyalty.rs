//! Loyalty card results.

use reference_storefront_core::{LoyaltyCard, LoyaltyRewardPoint, ServiceProviderResult};
use rust_decimal::Decimal;
use serde::Serialize;

use super::base::BaseJsonResult;
use crate::models::mapping::{Initialize, map_each};
use crate::site::StorefrontUri;

/// A reward point balance on a loyalty card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoyaltyRewardPointItemResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub reward_point_id: String,
    pub description: String,
    pub reward_point_type: String,
    pub active_points: Decimal,
    pub issued_points: Decimal,
    pub used_points: Decimal,
    pub expired_points: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Initialize<LoyaltyRewardPoint> for LoyaltyRewardPointItemResult {
    const ARGUMENT: &'static str = "rewardPoint";

    fn initialize(&mut self, point: &LoyaltyRewardPoint, _site: &dyn StorefrontUri) {
        self.reward_point_id.clone_from(&point.reward_point_id);
        self.description.clone_from(&point.description);
        self.reward_point_type.clone_from(&point.reward_point_type);
        self.active_points = point.active_points;
        self.issued_points = point.issued_points;
        self.used_points = point.used_points;
        self.expired_points = point.expired_points;
        self.currency_code.clone_from(&point.currency_code);
    }
}

/// A single loyalty card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoyaltyCardItemResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub external_id: String,
    pub card_number: String,
    pub customer_id: String,
    pub program_ids: Vec<String>,
    pub reward_points: Vec<LoyaltyRewardPointItemResult>,
}

impl Initialize<LoyaltyCard> for LoyaltyCardItemResult {
    const ARGUMENT: &'static str = "loyaltyCard";

    fn initialize(&mut self, card: &LoyaltyCard, site: &dyn StorefrontUri) {
        self.external_id.clone_from(&card.external_id);
        self.card_number.clone_from(&card.card_number);
        self.customer_id.clone_from(&card.customer_id);
        self.program_ids.clone_from(&card.program_ids);
        self.reward_points.clear();
        self.reward_points.extend(map_each(&card.reward_points, site));
    }
}

/// All loyalty cards of a customer, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoyaltyCardsResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub loyalty_cards: Vec<LoyaltyCardItemResult>,
}

impl LoyaltyCardsResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result carrying the status of a service call.
    #[must_use]
    pub fn with_status(result: &ServiceProviderResult) -> Self {
        Self {
            base: BaseJsonResult::from_service_result(result),
            loyalty_cards: Vec::new(),
        }
    }
}

impl Initialize<[LoyaltyCard]> for LoyaltyCardsResult {
    const ARGUMENT: &'static str = "loyaltyCards";

    fn initialize(&mut self, cards: &[LoyaltyCard], site: &dyn StorefrontUri) {
        self.loyalty_cards.clear();
        self.loyalty_cards.extend(map_each(cards, site));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::MappingError;
    use crate::site::SiteContext;

    fn card(external_id: &str, points: &[(&str, i64)]) -> LoyaltyCard {
        LoyaltyCard {
            external_id: external_id.to_string(),
            card_number: format!("CARD-{external_id}"),
            customer_id: "C-42".to_string(),
            program_ids: vec!["gold".to_string()],
            reward_points: points
                .iter()
                .map(|(id, active)| LoyaltyRewardPoint {
                    reward_point_id: (*id).to_string(),
                    active_points: Decimal::new(*active, 0),
                    ..LoyaltyRewardPoint::default()
                })
                .collect(),
            ..LoyaltyCard::default()
        }
    }

    #[test]
    fn test_card_item_copies_fields_and_points() {
        let mut result = LoyaltyCardItemResult::default();
        let source = card("LC-1", &[("RP1", 120), ("RP2", 5)]);
        result.initialize(&source, &SiteContext::default());

        assert_eq!(result.external_id, "LC-1");
        assert_eq!(result.card_number, "CARD-LC-1");
        assert_eq!(result.customer_id, "C-42");
        assert_eq!(result.program_ids, vec!["gold"]);
        assert_eq!(result.reward_points.len(), 2);
        assert_eq!(
            result.reward_points.first().map(|p| p.active_points),
            Some(Decimal::new(120, 0))
        );
    }

    #[test]
    fn test_cards_preserve_input_order() {
        let cards = vec![card("LC-3", &[]), card("LC-1", &[]), card("LC-2", &[])];
        let mut result = LoyaltyCardsResult::new();
        result.initialize(cards.as_slice(), &SiteContext::default());

        let ids: Vec<&str> = result
            .loyalty_cards
            .iter()
            .map(|c| c.external_id.as_str())
            .collect();
        assert_eq!(ids, ["LC-3", "LC-1", "LC-2"]);
    }

    #[test]
    fn test_cards_empty_input() {
        let cards: Vec<LoyaltyCard> = Vec::new();
        let mut result = LoyaltyCardsResult::new();
        result.initialize(cards.as_slice(), &SiteContext::default());
        assert!(result.loyalty_cards.is_empty());
        assert!(result.base.success);
    }

    #[test]
    fn test_cards_reinitialize_does_not_duplicate() {
        let cards = vec![card("LC-1", &[]), card("LC-2", &[])];
        let mut result = LoyaltyCardsResult::new();
        result.initialize(cards.as_slice(), &SiteContext::default());
        result.initialize(cards.as_slice(), &SiteContext::default());
        assert_eq!(result.loyalty_cards.len(), 2);
    }

    #[test]
    fn test_cards_null_collection() {
        let mut result = LoyaltyCardsResult::with_status(&ServiceProviderResult::succeeded());
        let err = result
            .try_initialize(None, &SiteContext::default())
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::ArgumentNull {
                argument: "loyaltyCards"
            }
        );
        assert!(result.loyalty_cards.is_empty());
    }

    #[test]
    fn test_serialize_wire_keys() {
        let cards = vec![card("LC-1", &[("RP1", 7)])];
        let mut result = LoyaltyCardsResult::new();
        result.initialize(cards.as_slice(), &SiteContext::default());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["Success"], true);
        assert_eq!(value["LoyaltyCards"][0]["ExternalId"], "LC-1");
        assert_eq!(value["LoyaltyCards"][0]["ProgramIds"][0], "gold");
        assert_eq!(
            value["LoyaltyCards"][0]["RewardPoints"][0]["RewardPointId"],
            "RP1"
        );
        assert_eq!(
            value["LoyaltyCards"][0]["RewardPoints"][0]["ActivePoints"],
            "7"
        );
    }
}
