//! Builders and parsers for platform resource names.
//!
//! Resource names are the string identifiers the platform assigns to every
//! resource, e.g. `customers/123/campaigns/456`. Criterion-style resources
//! use a composite final segment (`{parent_id}~{criterion_id}`).

use crate::error::{AdGridError, AdGridResult};

pub fn campaign_budget(customer_id: &str, budget_id: u64) -> String {
    format!("customers/{customer_id}/campaignBudgets/{budget_id}")
}

pub fn campaign(customer_id: &str, campaign_id: u64) -> String {
    format!("customers/{customer_id}/campaigns/{campaign_id}")
}

pub fn ad_group(customer_id: &str, ad_group_id: u64) -> String {
    format!("customers/{customer_id}/adGroups/{ad_group_id}")
}

pub fn ad(customer_id: &str, ad_id: u64) -> String {
    format!("customers/{customer_id}/ads/{ad_id}")
}

pub fn ad_group_ad(customer_id: &str, ad_group_id: u64, ad_id: u64) -> String {
    format!("customers/{customer_id}/adGroupAds/{ad_group_id}~{ad_id}")
}

pub fn ad_group_criterion(customer_id: &str, ad_group_id: u64, criterion_id: u64) -> String {
    format!("customers/{customer_id}/adGroupCriteria/{ad_group_id}~{criterion_id}")
}

pub fn campaign_criterion(customer_id: &str, campaign_id: u64, criterion_id: u64) -> String {
    format!("customers/{customer_id}/campaignCriteria/{campaign_id}~{criterion_id}")
}

pub fn customizer_attribute(customer_id: &str, attribute_id: u64) -> String {
    format!("customers/{customer_id}/customizerAttributes/{attribute_id}")
}

pub fn customer_customizer(customer_id: &str, customizer_id: u64) -> String {
    format!("customers/{customer_id}/customerCustomizers/{customizer_id}")
}

pub fn geo_target_constant(criterion_id: u64) -> String {
    format!("geoTargetConstants/{criterion_id}")
}

/// Final path segment of a resource name (the platform-assigned id part).
pub fn id_segment(resource_name: &str) -> AdGridResult<&str> {
    resource_name
        .rsplit('/')
        .next()
        .filter(|seg| !seg.is_empty())
        .ok_or_else(|| AdGridError::ResourceName(resource_name.to_string()))
}

/// Customer id of a customer-scoped resource name.
pub fn customer_id(resource_name: &str) -> AdGridResult<&str> {
    let mut parts = resource_name.split('/');
    match (parts.next(), parts.next()) {
        (Some("customers"), Some(id)) if !id.is_empty() => Ok(id),
        _ => Err(AdGridError::ResourceName(resource_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_simple_names() {
        assert_eq!(campaign("1234567890", 111), "customers/1234567890/campaigns/111");
        assert_eq!(geo_target_constant(21167), "geoTargetConstants/21167");
    }

    #[test]
    fn formats_composite_names() {
        assert_eq!(
            ad_group_criterion("7", 42, 9000),
            "customers/7/adGroupCriteria/42~9000"
        );
        assert_eq!(ad_group_ad("7", 42, 13), "customers/7/adGroupAds/42~13");
    }

    #[test]
    fn extracts_id_and_customer() {
        let name = campaign("1234567890", 111);
        assert_eq!(id_segment(&name).unwrap(), "111");
        assert_eq!(customer_id(&name).unwrap(), "1234567890");
    }

    #[test]
    fn rejects_foreign_names() {
        assert!(customer_id("geoTargetConstants/21167").is_err());
        assert!(id_segment("").is_err());
    }
}
