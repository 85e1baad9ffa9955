use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Enabled,
    Paused,
    Removed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvertisingChannelType {
    Search,
    Display,
    Video,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetDeliveryMethod {
    Standard,
    Accelerated,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdGroupStatus {
    Enabled,
    Paused,
    Removed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdGroupType {
    SearchStandard,
    DisplayStandard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdGroupAdStatus {
    Enabled,
    Paused,
    Removed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdGroupCriterionStatus {
    Enabled,
    Paused,
    Removed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeywordMatchType {
    Exact,
    Phrase,
    Broad,
}

/// Field slot a pinned text asset is locked to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServedAssetFieldType {
    #[serde(rename = "HEADLINE_1")]
    Headline1,
    #[serde(rename = "HEADLINE_2")]
    Headline2,
    #[serde(rename = "HEADLINE_3")]
    Headline3,
    #[serde(rename = "DESCRIPTION_1")]
    Description1,
    #[serde(rename = "DESCRIPTION_2")]
    Description2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomizerAttributeType {
    Text,
    Number,
    Price,
    Percent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProximityRadiusUnits {
    Miles,
    Kilometers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&AdGroupType::SearchStandard).unwrap(),
            "\"SEARCH_STANDARD\""
        );
        assert_eq!(
            serde_json::to_string(&KeywordMatchType::Broad).unwrap(),
            "\"BROAD\""
        );
    }

    #[test]
    fn pinned_field_slots_carry_the_numeric_suffix() {
        assert_eq!(
            serde_json::to_string(&ServedAssetFieldType::Headline1).unwrap(),
            "\"HEADLINE_1\""
        );
        let parsed: ServedAssetFieldType = serde_json::from_str("\"DESCRIPTION_2\"").unwrap();
        assert_eq!(parsed, ServedAssetFieldType::Description2);
    }
}
