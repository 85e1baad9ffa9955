use serde::Deserialize;
use thiserror::Error;

pub type AdGridResult<T> = Result<T, AdGridError>;

#[derive(Error, Debug)]
pub enum AdGridError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Structured failure reported by the platform. Never retried.
    #[error(transparent)]
    Api(#[from] ApiFailure),

    /// Network-level failure before a structured response was received.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("retries exhausted after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid resource name: {0}")]
    ResourceName(String),

    /// A mutate succeeded but returned no results to read a resource
    /// name from.
    #[error("mutate response carried no results")]
    EmptyMutateResponse,
}

/// Platform error payload: a request id, a status name and one field-level
/// error per offending operation field.
#[derive(Error, Debug, Clone)]
#[error("request {} failed with status {status}", .request_id.as_deref().unwrap_or("<unknown>"))]
pub struct ApiFailure {
    /// HTTP status code of the response that carried the failure.
    pub code: u16,
    /// Canonical status name, e.g. `INVALID_ARGUMENT`.
    pub status: String,
    pub request_id: Option<String>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone)]
pub struct FieldError {
    pub message: String,
    /// Path of the offending field within the operation, outermost first.
    pub field_path: Vec<String>,
}

// Wire shape of the error envelope. Field-level details ride in the
// `details` list next to the request id.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDetail {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    errors: Vec<DetailError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    location: Option<DetailLocation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailLocation {
    #[serde(default)]
    field_path_elements: Vec<FieldPathElement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldPathElement {
    field_name: String,
}

impl ApiFailure {
    /// Parse the JSON error body of a non-success response. Returns `None`
    /// when the body does not carry the structured envelope (proxies,
    /// HTML error pages).
    pub fn from_response_body(code: u16, body: &str) -> Option<Self> {
        let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
        let mut request_id = None;
        let mut errors = Vec::new();
        for detail in envelope.error.details {
            if detail.request_id.is_some() {
                request_id = detail.request_id;
            }
            for err in detail.errors {
                errors.push(FieldError {
                    message: err.message,
                    field_path: err
                        .location
                        .map(|loc| {
                            loc.field_path_elements
                                .into_iter()
                                .map(|el| el.field_name)
                                .collect()
                        })
                        .unwrap_or_default(),
                });
            }
        }
        Some(ApiFailure {
            code,
            status: envelope.error.status.unwrap_or_else(|| "UNKNOWN".to_string()),
            request_id,
            errors,
        })
    }

    /// Whether a failed request may succeed on retry.
    pub fn is_transient(&self) -> bool {
        self.code == 429 || self.code >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "error": {
            "code": 400,
            "message": "Request contains an invalid argument.",
            "status": "INVALID_ARGUMENT",
            "details": [
                {
                    "requestId": "gLu7VWSeGrunbAPGzXli5g",
                    "errors": [
                        {
                            "errorCode": {"campaignBudgetError": "DUPLICATE_NAME"},
                            "message": "A budget with this name already exists.",
                            "location": {
                                "fieldPathElements": [
                                    {"fieldName": "operations", "index": 0},
                                    {"fieldName": "create"},
                                    {"fieldName": "name"}
                                ]
                            }
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn parses_structured_failure() {
        let failure = ApiFailure::from_response_body(400, BODY).unwrap();
        assert_eq!(failure.status, "INVALID_ARGUMENT");
        assert_eq!(failure.request_id.as_deref(), Some("gLu7VWSeGrunbAPGzXli5g"));
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(
            failure.errors[0].message,
            "A budget with this name already exists."
        );
        assert_eq!(
            failure.errors[0].field_path,
            vec!["operations", "create", "name"]
        );
        assert!(!failure.is_transient());
    }

    #[test]
    fn unstructured_body_yields_none() {
        assert!(ApiFailure::from_response_body(502, "<html>Bad Gateway</html>").is_none());
    }

    #[test]
    fn rate_limit_and_server_errors_are_transient() {
        let failure = ApiFailure {
            code: 429,
            status: "RESOURCE_EXHAUSTED".to_string(),
            request_id: None,
            errors: vec![],
        };
        assert!(failure.is_transient());
        let failure = ApiFailure { code: 503, ..failure };
        assert!(failure.is_transient());
    }
}
