//! Integration tests for the send-SMS command over the mock provider

use std::sync::Arc;

use ct_core::domain::entities::CommandResult;
use ct_core::domain::value_objects::ConfigValue;
use ct_core::errors::CommandError;
use ct_infra::config::TwilioConfig;
use ct_infra::sms::MockSmsProvider;
use ct_infra::InfrastructureError;

fn mock_config() -> TwilioConfig {
    TwilioConfig::new("ACintegration", "integration_token", "15557654321")
}

#[tokio::test]
async fn test_complete_sms_workflow() {
    let provider = Arc::new(MockSmsProvider::with_options(false, false));
    let command = ct_infra::connect(provider.clone(), &mock_config())
        .await
        .expect("mock provider accepts credentials");

    assert_eq!(command.from_number().as_str(), "+15557654321");
    assert_eq!(command.provider_name(), "Mock");

    let result = command.execute("19875551234", "Integration message").await;
    let json = result.to_json();

    assert_eq!(json["status"], 200);
    assert_eq!(json["to"], "+19875551234");
    assert_eq!(json["from"], "+15557654321");
    assert_eq!(json["status_code"], "queued");
    assert!(json["message_sid"].as_str().unwrap().starts_with("SM"));
    assert_eq!(provider.get_message_count(), 1);
}

#[tokio::test]
async fn test_rejected_credentials_stop_setup() {
    let provider = Arc::new(MockSmsProvider::with_options(false, false));
    provider.set_reject_credentials(true);

    let result = ct_infra::connect(provider.clone(), &mock_config()).await;
    match result {
        Err(InfrastructureError::Command(CommandError::Configuration { message })) => {
            assert!(message.contains("Invalid Mock credentials"));
        }
        Err(other) => panic!("Expected configuration error, got {:?}", other),
        Ok(_) => panic!("Expected configuration error"),
    }
    assert_eq!(provider.get_message_count(), 0);
}

#[tokio::test]
async fn test_failures_are_reported_as_results() {
    let provider = Arc::new(MockSmsProvider::with_options(false, false));
    let command = ct_infra::connect(provider.clone(), &mock_config())
        .await
        .unwrap();

    let invalid = command.execute("notanumber", "hello").await;
    assert_eq!(invalid.to_json()["error_type"], "ValidationError");
    assert_eq!(provider.get_message_count(), 0);

    provider.set_simulate_failure(true);
    let rejected = command.execute("+19875551234", "hello").await;
    match rejected {
        CommandResult::Failure(failure) => {
            assert_eq!(failure.error_type, "ProviderError");
            assert_eq!(failure.error_message, "Simulated SMS sending failure");
        }
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wrapped_values_from_host_engine() {
    let provider = Arc::new(MockSmsProvider::with_options(false, false));
    let config = mock_config();
    let command = ct_infra::connect(provider, &config).await.unwrap();

    let secret_body = ConfigValue::wrapped(|| "Your order has shipped".to_string());
    let result = command.execute(ConfigValue::from("+19875551234"), secret_body).await;

    assert!(result.is_success());
}
