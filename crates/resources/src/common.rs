use serde::{Deserialize, Serialize};

use crate::enums::{KeywordMatchType, ProximityRadiusUnits, ServedAssetFieldType};

/// A headline or description asset of a responsive search ad.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdTextAsset {
    pub text: String,
    /// Pin the asset so it always serves in this slot. Unpinned assets are
    /// rotated by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_field: Option<ServedAssetFieldType>,
}

impl AdTextAsset {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pinned_field: None,
        }
    }

    pub fn pinned(text: impl Into<String>, field: ServedAssetFieldType) -> Self {
        Self {
            text: text.into(),
            pinned_field: Some(field),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveSearchAdInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headlines: Vec<AdTextAsset>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<AdTextAsset>,
    /// First display-path segment appended to the visible URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path2: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordInfo {
    pub text: String,
    pub match_type: KeywordMatchType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    /// Resource name of the geo target constant, e.g. `geoTargetConstants/21167`.
    pub geo_target_constant: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProximityInfo {
    pub address: AddressInfo,
    pub radius: f64,
    pub radius_units: ProximityRadiusUnits,
}

/// Which networks a campaign serves on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_google_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_search_network: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_partner_search_network: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_content_network: Option<bool>,
}

/// Maximize-clicks bidding strategy. The spend ceiling field is deprecated
/// upstream; serializing the empty struct selects the strategy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_spend_micros: Option<i64>,
}
