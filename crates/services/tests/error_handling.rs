//! Failure propagation and retry behavior of the client.

mod support;

use adgrid_core::{AdGridError, ApiFailure};
use adgrid_resources::CampaignBudget;
use adgrid_services::Operation;

use support::{client, mutate_result, MockTransport};

const CUSTOMER_ID: &str = "1234567890";

fn invalid_argument() -> ApiFailure {
    ApiFailure::from_response_body(
        400,
        r#"{
            "error": {
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "requestId": "gLu7VWSeGrunbAPGzXli5g",
                    "errors": [{
                        "message": "A budget with this name already exists.",
                        "location": {"fieldPathElements": [
                            {"fieldName": "operations"},
                            {"fieldName": "create"},
                            {"fieldName": "name"}
                        ]}
                    }]
                }]
            }
        }"#,
    )
    .unwrap()
}

fn server_error() -> ApiFailure {
    ApiFailure {
        code: 500,
        status: "INTERNAL".to_string(),
        request_id: None,
        errors: vec![],
    }
}

fn budget_op() -> Operation<CampaignBudget> {
    Operation::create(CampaignBudget {
        name: Some("Campaign budget 1".to_string()),
        ..CampaignBudget::default()
    })
}

#[tokio::test]
async fn structured_failure_propagates_without_retry() {
    let transport = MockTransport::new(vec![Err(AdGridError::Api(invalid_argument()))]);
    let client = client(transport.clone());

    let err = client
        .campaign_budget_service()
        .mutate_campaign_budgets(CUSTOMER_ID, vec![budget_op()])
        .await
        .unwrap_err();

    match err {
        AdGridError::Api(failure) => {
            assert_eq!(failure.status, "INVALID_ARGUMENT");
            assert_eq!(failure.request_id.as_deref(), Some("gLu7VWSeGrunbAPGzXli5g"));
            assert_eq!(
                failure.errors[0].field_path,
                vec!["operations", "create", "name"]
            );
        }
        other => panic!("expected Api failure, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn transient_failure_is_retried_then_succeeds() {
    let transport = MockTransport::new(vec![
        Err(AdGridError::Api(server_error())),
        Err(AdGridError::Transport("connection reset".to_string())),
        mutate_result("customers/1234567890/campaignBudgets/11"),
    ]);
    let client = client(transport.clone());

    let response = client
        .campaign_budget_service()
        .mutate_campaign_budgets(CUSTOMER_ID, vec![budget_op()])
        .await
        .unwrap();

    assert_eq!(
        response.first_resource_name(),
        Some("customers/1234567890/campaignBudgets/11")
    );
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test]
async fn exhausted_retries_report_the_last_error() {
    let transport = MockTransport::new(vec![
        Err(AdGridError::Api(server_error())),
        Err(AdGridError::Api(server_error())),
        Err(AdGridError::Api(server_error())),
    ]);
    let client = client(transport.clone());

    let err = client
        .campaign_budget_service()
        .mutate_campaign_budgets(CUSTOMER_ID, vec![budget_op()])
        .await
        .unwrap_err();

    match err {
        AdGridError::RetriesExhausted {
            attempts,
            last_error,
        } => {
            assert_eq!(attempts, 3);
            assert!(last_error.contains("INTERNAL"), "{last_error}");
        }
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 3);
}
