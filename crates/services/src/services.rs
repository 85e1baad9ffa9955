//! One thin handle per resource collection. Each mutate accepts a list of
//! operations and returns the platform-assigned resource names in order.

use adgrid_core::AdGridResult;
use adgrid_resources::{
    Ad, AdGroup, AdGroupAd, AdGroupCriterion, Campaign, CampaignBudget, CampaignCriterion,
    CustomerCustomizer, CustomizerAttribute, GeoTargetConstant,
};
use serde::{Deserialize, Serialize};

use crate::client::AdGridClient;
use crate::operation::{MutateResponse, Operation};
use crate::transport::Transport;

pub struct CampaignBudgetService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> CampaignBudgetService<'_, T> {
    pub async fn mutate_campaign_budgets(
        &self,
        customer_id: &str,
        operations: Vec<Operation<CampaignBudget>>,
    ) -> AdGridResult<MutateResponse> {
        self.client
            .mutate(customer_id, "campaignBudgets", operations)
            .await
    }
}

pub struct CampaignService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> CampaignService<'_, T> {
    pub async fn mutate_campaigns(
        &self,
        customer_id: &str,
        operations: Vec<Operation<Campaign>>,
    ) -> AdGridResult<MutateResponse> {
        self.client.mutate(customer_id, "campaigns", operations).await
    }
}

pub struct AdGroupService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> AdGroupService<'_, T> {
    pub async fn mutate_ad_groups(
        &self,
        customer_id: &str,
        operations: Vec<Operation<AdGroup>>,
    ) -> AdGridResult<MutateResponse> {
        self.client.mutate(customer_id, "adGroups", operations).await
    }
}

pub struct AdGroupAdService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> AdGroupAdService<'_, T> {
    pub async fn mutate_ad_group_ads(
        &self,
        customer_id: &str,
        operations: Vec<Operation<AdGroupAd>>,
    ) -> AdGridResult<MutateResponse> {
        self.client.mutate(customer_id, "adGroupAds", operations).await
    }
}

/// Mutates ads in place (updates only; ads are created through
/// [`AdGroupAdService`]).
pub struct AdService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> AdService<'_, T> {
    pub async fn mutate_ads(
        &self,
        customer_id: &str,
        operations: Vec<Operation<Ad>>,
    ) -> AdGridResult<MutateResponse> {
        self.client.mutate(customer_id, "ads", operations).await
    }
}

pub struct AdGroupCriterionService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> AdGroupCriterionService<'_, T> {
    pub async fn mutate_ad_group_criteria(
        &self,
        customer_id: &str,
        operations: Vec<Operation<AdGroupCriterion>>,
    ) -> AdGridResult<MutateResponse> {
        self.client
            .mutate(customer_id, "adGroupCriteria", operations)
            .await
    }
}

pub struct CampaignCriterionService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> CampaignCriterionService<'_, T> {
    pub async fn mutate_campaign_criteria(
        &self,
        customer_id: &str,
        operations: Vec<Operation<CampaignCriterion>>,
    ) -> AdGridResult<MutateResponse> {
        self.client
            .mutate(customer_id, "campaignCriteria", operations)
            .await
    }
}

pub struct CustomizerAttributeService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> CustomizerAttributeService<'_, T> {
    pub async fn mutate_customizer_attributes(
        &self,
        customer_id: &str,
        operations: Vec<Operation<CustomizerAttribute>>,
    ) -> AdGridResult<MutateResponse> {
        self.client
            .mutate(customer_id, "customizerAttributes", operations)
            .await
    }
}

pub struct CustomerCustomizerService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> CustomerCustomizerService<'_, T> {
    pub async fn mutate_customer_customizers(
        &self,
        customer_id: &str,
        operations: Vec<Operation<CustomerCustomizer>>,
    ) -> AdGridResult<MutateResponse> {
        self.client
            .mutate(customer_id, "customerCustomizers", operations)
            .await
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestGeoTargetConstantsRequest {
    /// ISO 639-1 locale the location names are written in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_names: Option<LocationNames>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LocationNames {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestGeoTargetConstantsResponse {
    #[serde(default)]
    pub geo_target_constant_suggestions: Vec<GeoTargetConstantSuggestion>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoTargetConstantSuggestion {
    /// Locale the suggestion matched under; may differ from the requested
    /// one when the platform falls back.
    #[serde(default)]
    pub locale: Option<String>,
    /// Estimated audience size of the location.
    #[serde(default)]
    pub reach: Option<i64>,
    /// The location name this suggestion was derived from.
    #[serde(default)]
    pub search_term: Option<String>,
    pub geo_target_constant: GeoTargetConstant,
}

pub struct GeoTargetConstantService<'a, T: Transport> {
    pub(crate) client: &'a AdGridClient<T>,
}

impl<T: Transport> GeoTargetConstantService<'_, T> {
    pub async fn suggest_geo_target_constants(
        &self,
        request: SuggestGeoTargetConstantsRequest,
    ) -> AdGridResult<SuggestGeoTargetConstantsResponse> {
        let path = format!("{}/geoTargetConstants:suggest", self.client.api_version());
        let body = serde_json::to_value(&request)?;
        let value = self.client.call(&path, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}
