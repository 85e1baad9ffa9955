use adgrid_core::FieldMask;
use serde::{Deserialize, Serialize};

use crate::common::{KeywordInfo, ResponsiveSearchAdInfo};
use crate::enums::{AdGroupAdStatus, AdGroupCriterionStatus, AdGroupStatus, AdGroupType};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdGroupStatus>,
    /// Resource name of the owning campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ad_group_type: Option<AdGroupType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpc_bid_micros: Option<i64>,
}

/// The ad proper. Referenced from an [`AdGroupAd`] on create and mutated
/// directly (by its own resource name) on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Possible final URLs after all cross-domain redirects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub final_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub final_mobile_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_search_ad: Option<ResponsiveSearchAdInfo>,
}

impl Ad {
    /// Field mask covering exactly the populated fields, for update
    /// operations. Repeated sub-fields of the responsive search ad are
    /// masked individually so untouched siblings survive the update.
    pub fn update_mask(&self) -> FieldMask {
        let mut mask = FieldMask::new();
        if self.resource_name.is_some() {
            mask.push("resourceName");
        }
        if !self.final_urls.is_empty() {
            mask.push("finalUrls");
        }
        if !self.final_mobile_urls.is_empty() {
            mask.push("finalMobileUrls");
        }
        if let Some(rsa) = &self.responsive_search_ad {
            if !rsa.headlines.is_empty() {
                mask.push("responsiveSearchAd.headlines");
            }
            if !rsa.descriptions.is_empty() {
                mask.push("responsiveSearchAd.descriptions");
            }
            if rsa.path1.is_some() {
                mask.push("responsiveSearchAd.path1");
            }
            if rsa.path2.is_some() {
                mask.push("responsiveSearchAd.path2");
            }
        }
        mask
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupAd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdGroupAdStatus>,
    /// Resource name of the owning ad group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad: Option<Ad>,
}

/// An ad-group-level criterion; keywords are the only kind the client
/// surface currently populates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupCriterion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdGroupCriterionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<KeywordInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub final_urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::AdTextAsset;
    use crate::enums::ServedAssetFieldType;

    fn update_payload() -> Ad {
        Ad {
            resource_name: Some("customers/1/ads/2".to_string()),
            final_urls: vec!["https://www.example.com".to_string()],
            final_mobile_urls: vec!["https://www.example.com/mobile".to_string()],
            responsive_search_ad: Some(ResponsiveSearchAdInfo {
                headlines: vec![AdTextAsset::pinned(
                    "Cruise to Pluto #abc123",
                    ServedAssetFieldType::Headline1,
                )],
                descriptions: vec![AdTextAsset::new("Best space cruise ever.")],
                path1: None,
                path2: None,
            }),
        }
    }

    #[test]
    fn update_mask_lists_exactly_the_populated_fields() {
        let mask = update_payload().update_mask();
        let mut paths: Vec<_> = mask.paths().to_vec();
        paths.sort();
        assert_eq!(
            paths,
            [
                "finalMobileUrls",
                "finalUrls",
                "resourceName",
                "responsiveSearchAd.descriptions",
                "responsiveSearchAd.headlines",
            ]
        );
    }

    #[test]
    fn update_mask_of_empty_ad_is_empty() {
        assert!(Ad::default().update_mask().is_empty());
    }

    #[test]
    fn ad_group_type_field_serializes_as_type() {
        let ad_group = AdGroup {
            ad_group_type: Some(AdGroupType::SearchStandard),
            ..AdGroup::default()
        };
        let json = serde_json::to_value(&ad_group).unwrap();
        assert_eq!(json["type"], "SEARCH_STANDARD");
    }
}
