use serde::{Deserialize, Serialize};

use crate::common::{KeywordInfo, LocationInfo, NetworkSettings, ProximityInfo, TargetSpend};
use crate::enums::{AdvertisingChannelType, BudgetDeliveryMethod, CampaignStatus};

/// A budget shareable by multiple campaigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBudget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<BudgetDeliveryMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_micros: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertising_channel_type: Option<AdvertisingChannelType>,
    /// Resource name of the backing budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_settings: Option<NetworkSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_spend: Option<TargetSpend>,
    /// Format `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// A campaign-level targeting criterion. Exactly one of the criterion
/// oneof fields (`keyword`, `location`, `proximity`) is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCriterion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Resource name of the owning campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// Whether to exclude rather than target the criterion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<KeywordInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity: Option<ProximityInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::KeywordMatchType;

    #[test]
    fn create_payload_skips_unset_fields() {
        let budget = CampaignBudget {
            name: Some("Campaign budget 42".to_string()),
            delivery_method: Some(BudgetDeliveryMethod::Standard),
            amount_micros: Some(500_000),
            ..CampaignBudget::default()
        };
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Campaign budget 42",
                "deliveryMethod": "STANDARD",
                "amountMicros": 500_000,
            })
        );
    }

    #[test]
    fn negative_keyword_criterion_shape() {
        let criterion = CampaignCriterion {
            campaign: Some("customers/1/campaigns/2".to_string()),
            negative: Some(true),
            keyword: Some(KeywordInfo {
                text: "jupiter cruise".to_string(),
                match_type: KeywordMatchType::Broad,
            }),
            ..CampaignCriterion::default()
        };
        let json = serde_json::to_value(&criterion).unwrap();
        assert_eq!(json["negative"], true);
        assert_eq!(json["keyword"]["matchType"], "BROAD");
        assert!(json.get("location").is_none());
        assert!(json.get("proximity").is_none());
    }
}
