//! Credential loading happens before any network activity.

use presskit::{Credentials, PressError, WpClient};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_missing_credentials_make_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = Credentials::from_lookup(|name| match name {
        "WP_SITE_URL" => Some(uri.clone()),
        "WP_USERNAME" => Some("editor".to_string()),
        _ => None,
    });

    let err = result.unwrap_err();
    assert!(matches!(err, PressError::ConfigMissing(_)));
    assert_eq!(
        err.to_string(),
        "Missing required configuration: WP_APP_PASSWORD"
    );

    // wiremock verifies zero requests on MockServer drop
}

#[test]
fn test_client_from_explicit_credentials() {
    let credentials = Credentials::new("https://example.com/", "editor", "secret").unwrap();
    let client = tokio_test::assert_ok!(WpClient::new(&credentials));
    assert_eq!(client.api_root().as_str(), "https://example.com/wp-json/wp/v2/");
}

#[test]
fn test_empty_explicit_credentials_are_rejected() {
    let err = tokio_test::assert_err!(Credentials::new("https://example.com", "", ""));
    assert_eq!(
        err.to_string(),
        "Missing required configuration: WP_USERNAME, WP_APP_PASSWORD"
    );
}
