use adgrid_core::FieldMask;
use serde::{Deserialize, Serialize};

/// A single mutation of one resource: exactly one of `create`, `update`
/// or `remove` is set. Updates carry the field mask beside the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation<R> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<R>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<R>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
    /// Resource name of the resource to remove.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<String>,
}

impl<R> Operation<R> {
    pub fn create(resource: R) -> Self {
        Self {
            create: Some(resource),
            update: None,
            update_mask: None,
            remove: None,
        }
    }

    pub fn update(resource: R, update_mask: FieldMask) -> Self {
        Self {
            create: None,
            update: Some(resource),
            update_mask: Some(update_mask),
            remove: None,
        }
    }

    pub fn remove(resource_name: impl Into<String>) -> Self {
        Self {
            create: None,
            update: None,
            update_mask: None,
            remove: Some(resource_name.into()),
        }
    }
}

/// Body of a `:mutate` call.
#[derive(Debug, Clone, Serialize)]
pub struct MutateRequest<R> {
    pub operations: Vec<Operation<R>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MutateResponse {
    #[serde(default)]
    pub results: Vec<MutateResult>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutateResult {
    pub resource_name: String,
}

impl MutateResponse {
    /// Resource name of the first result. Mutates issued by this client
    /// send one operation per request unless noted otherwise, so the first
    /// result is usually the only one.
    pub fn first_resource_name(&self) -> Option<&str> {
        self.results.first().map(|r| r.resource_name.as_str())
    }
}
