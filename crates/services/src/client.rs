use adgrid_core::{AdGridConfig, AdGridError, AdGridResult, RetryPolicy};
use serde::Serialize;
use tracing::warn;

use crate::operation::{MutateRequest, MutateResponse, Operation};
use crate::services::*;
use crate::transport::{HttpTransport, Transport};

/// Entry point to the API: owns the transport and retry tuning and hands
/// out one typed service per resource collection.
pub struct AdGridClient<T: Transport> {
    transport: T,
    api_version: String,
    retry: RetryPolicy,
}

impl AdGridClient<HttpTransport> {
    pub fn from_config(config: &AdGridConfig) -> Self {
        Self {
            transport: HttpTransport::new(config),
            api_version: config.api_version.clone(),
            retry: config.retry.clone(),
        }
    }
}

impl<T: Transport> AdGridClient<T> {
    /// Build a client over a custom transport, used by tests and by
    /// callers that stub the network.
    pub fn with_transport(transport: T, api_version: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            transport,
            api_version: api_version.into(),
            retry,
        }
    }

    /// One API call with retries on transient failures. Structured API
    /// errors propagate immediately; 429/5xx and connection errors are
    /// retried per the policy, then reported as retry exhaustion.
    pub(crate) async fn call(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> AdGridResult<serde_json::Value> {
        let mut attempt = 0u32;
        loop {
            match self.transport.call(path, body.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let transient = match &err {
                        AdGridError::Transport(_) => true,
                        AdGridError::Api(failure) => failure.is_transient(),
                        _ => false,
                    };
                    if !transient {
                        return Err(err);
                    }
                    attempt += 1;
                    if attempt >= self.retry.max_attempts {
                        return Err(AdGridError::RetriesExhausted {
                            attempts: attempt,
                            last_error: err.to_string(),
                        });
                    }
                    let backoff = self.retry.backoff_for_attempt(attempt - 1);
                    warn!(%path, attempt, backoff_ms = backoff.as_millis() as u64, error = %err,
                        "transient failure, backing off");
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    pub(crate) fn api_version(&self) -> &str {
        &self.api_version
    }

    pub(crate) async fn mutate<R: Serialize>(
        &self,
        customer_id: &str,
        collection: &str,
        operations: Vec<Operation<R>>,
    ) -> AdGridResult<MutateResponse> {
        let path = format!(
            "{}/customers/{}/{}:mutate",
            self.api_version, customer_id, collection
        );
        let body = serde_json::to_value(MutateRequest { operations })?;
        let value = self.call(&path, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn campaign_budget_service(&self) -> CampaignBudgetService<'_, T> {
        CampaignBudgetService { client: self }
    }

    pub fn campaign_service(&self) -> CampaignService<'_, T> {
        CampaignService { client: self }
    }

    pub fn ad_group_service(&self) -> AdGroupService<'_, T> {
        AdGroupService { client: self }
    }

    pub fn ad_group_ad_service(&self) -> AdGroupAdService<'_, T> {
        AdGroupAdService { client: self }
    }

    pub fn ad_service(&self) -> AdService<'_, T> {
        AdService { client: self }
    }

    pub fn ad_group_criterion_service(&self) -> AdGroupCriterionService<'_, T> {
        AdGroupCriterionService { client: self }
    }

    pub fn campaign_criterion_service(&self) -> CampaignCriterionService<'_, T> {
        CampaignCriterionService { client: self }
    }

    pub fn customizer_attribute_service(&self) -> CustomizerAttributeService<'_, T> {
        CustomizerAttributeService { client: self }
    }

    pub fn customer_customizer_service(&self) -> CustomerCustomizerService<'_, T> {
        CustomerCustomizerService { client: self }
    }

    pub fn geo_target_constant_service(&self) -> GeoTargetConstantService<'_, T> {
        GeoTargetConstantService { client: self }
    }
}
