//! Integration tests for the Keycloak HTTP executor using wiremock
//!
//! These tests verify token acquisition, bearer authentication, URL
//! construction, and the mapping of response codes to errors.

use kcadmin::http::{Query, QueryExecutor};
use kcadmin::keycloak::{format_api_error, ConnectionSettings, Grant, Keycloak};
use kcadmin::representation::Realm;
use kcadmin::Error;
use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/realms/master/protocol/openid-connect/token";

fn password_settings(server: &MockServer) -> ConnectionSettings {
    ConnectionSettings {
        server_url: server.uri(),
        auth_realm: "master".to_string(),
        grant: Grant::Password {
            client_id: "admin-cli".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
        },
    }
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": 300,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

async fn client(server: &MockServer) -> Keycloak {
    mount_token(server, "test-token").await;
    Keycloak::new(&password_settings(server)).expect("Client should build")
}

/// Token handling
mod auth_tests {
    use super::*;

    /// Tokens are fetched once and reused while valid
    #[tokio::test]
    async fn test_token_is_cached() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .and(body_string_contains("username=admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "cached-token",
                "expires_in": 300
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/admin/realms"))
            .and(bearer_token("cached-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let keycloak = Keycloak::new(&password_settings(&server)).unwrap();
        let realms = keycloak.realms();

        assert!(realms.all().await.unwrap().is_empty());
        assert!(realms.all().await.unwrap().is_empty());
    }

    /// Client credentials grant sends the client secret
    #[tokio::test]
    async fn test_client_credentials_grant() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/realms/ops/protocol/openid-connect/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_secret=s3cr3t"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "service-token",
                "expires_in": 60
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/ops"))
            .and(bearer_token("service-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"realm": "ops"})))
            .mount(&server)
            .await;

        let keycloak = Keycloak::new(&ConnectionSettings {
            server_url: server.uri(),
            auth_realm: "ops".to_string(),
            grant: Grant::ClientCredentials {
                client_id: "automation".to_string(),
                client_secret: "s3cr3t".to_string(),
            },
        })
        .unwrap();

        let realm = keycloak.realms().get("ops").await.unwrap();
        assert_eq!(realm.realm().unwrap().unwrap(), "ops");
    }

    /// Rejected credentials surface as a 401 API error
    #[tokio::test]
    async fn test_bad_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid user credentials"
            })))
            .mount(&server)
            .await;

        let keycloak = Keycloak::new(&password_settings(&server)).unwrap();
        let err = keycloak.realms().all().await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 401, .. }));
        assert!(format_api_error(&err).contains("Authentication failed"));
    }

    /// A 401 from the admin API refreshes the token and resends once
    #[tokio::test]
    async fn test_expired_token_is_refreshed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "stale-token",
                "expires_in": 300
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_token(&server, "fresh-token").await;

        Mock::given(method("GET"))
            .and(path("/admin/realms"))
            .and(bearer_token("stale-token"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/admin/realms"))
            .and(bearer_token("fresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"realm": "master"}])))
            .expect(1)
            .mount(&server)
            .await;

        let keycloak = Keycloak::new(&password_settings(&server)).unwrap();
        let all = keycloak.realms().all().await.unwrap();

        assert_eq!(all.first().unwrap().realm().unwrap().unwrap(), "master");
    }

    /// A second 401 is returned instead of looping
    #[tokio::test]
    async fn test_refresh_happens_only_once() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/realms"))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&server)
            .await;

        let err = keycloak.realms().all().await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 401, .. }));
    }
}

/// Realm endpoints over HTTP
mod realm_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_realms() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/realms"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "master", "realm": "master", "enabled": true},
                {"id": "b6d9db69-39c9-489f-8d15-757bdc827e8d", "realm": "test", "enabled": false}
            ])))
            .mount(&server)
            .await;

        let all = keycloak.realms().all().await.unwrap();

        assert_eq!(all.count(), 2);
        assert_eq!(all.get(1).unwrap().enabled().unwrap(), Some(&false));
    }

    #[tokio::test]
    async fn test_import_posts_assigned_properties_only() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/realms"))
            .and(bearer_token("test-token"))
            .and(body_json(json!({"realm": "demo", "enabled": true})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "0f3c1a2b-demo",
                "realm": "demo",
                "enabled": true,
                "sslRequired": "external"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = keycloak
            .realms()
            .import(Realm::new().with_realm("demo").with_enabled(true), None)
            .await
            .unwrap();

        assert_eq!(created.id().unwrap().unwrap(), "0f3c1a2b-demo");
        assert_eq!(created.ssl_required().unwrap().unwrap(), "external");
    }

    #[tokio::test]
    async fn test_delete_request() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/admin/realms/demo"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        keycloak.realms().delete("demo").await.unwrap();
    }

    #[tokio::test]
    async fn test_404_returns_api_error() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Realm not found."})),
            )
            .mount(&server)
            .await;

        let err = keycloak.realms().get("missing").await.unwrap_err();

        match &err {
            Error::Api { status, message } => {
                assert_eq!(*status, 404);
                assert!(message.contains("Realm not found."));
            },
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(format_api_error(&err), "Resource not found.");
    }

    #[tokio::test]
    async fn test_409_conflict_on_import() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/realms"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "errorMessage": "Conflict detected. See logs for details"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"realm": "demo"})))
            .expect(0)
            .mount(&server)
            .await;

        let err = keycloak
            .realms()
            .import(Realm::new().with_realm("demo"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_path_parameters_are_encoded() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/realms/my%20realm/clear-user-cache"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        keycloak.realms().clear_user_cache("my realm").await.unwrap();
    }

    #[tokio::test]
    async fn test_unused_parameters_become_query_string() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/test/admin-events"))
            .and(query_param("max", "5"))
            .and(query_param("operationTypes", "DELETE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"operationType": "DELETE", "resourceType": "USER"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let query = Query::returning::<Vec<Value>>("/admin/realms/{realm}/admin-events")
            .with_parameter("realm", "test")
            .with_parameter("max", "5")
            .with_parameter("operationTypes", "DELETE");

        let raw = keycloak.execute_query(&query).await.unwrap();
        let events: Vec<Value> = query.decode(raw).unwrap();

        assert_eq!(events[0]["resourceType"], "USER");
    }

    #[tokio::test]
    async fn test_empty_body_on_query_is_a_decode_error() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/test"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = keycloak.realms().get("test").await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let server = MockServer::start().await;
        let keycloak = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/realms"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = keycloak.realms().all().await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 503, .. }));
        assert!(format_api_error(&err).contains("temporarily unavailable"));
    }
}
