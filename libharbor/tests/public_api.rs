use libharbor::client::{ClientConfig, Method};
use libharbor::models::ListProjectsOptions;
use libharbor::routes::{RouteParams, RouteTable};
use libharbor::{Config, Credentials, Harbor, HarborBuilder, HarborError};
use std::sync::Arc;
use std::thread;

#[test]
fn test_version_is_set() {
    assert!(!libharbor::version().is_empty());
}

#[test]
fn test_builder_requires_base_url() {
    let result = HarborBuilder::new().build();
    assert!(matches!(result, Err(HarborError::Validation { .. })));
}

#[test]
fn test_builder_rejects_invalid_base_url() {
    let result = Harbor::builder().base_url("  ").build();
    assert!(matches!(result, Err(HarborError::InvalidUrl { .. })));
}

#[test]
fn test_builder_reports_every_missing_route() {
    let routes = RouteTable::from_templates([("projects.root", "projects")]).unwrap();
    let result = Harbor::builder()
        .base_url("harbor.local")
        .routes(routes)
        .build();

    match result {
        Err(HarborError::Config { message, .. }) => {
            assert!(message.contains("users.current"));
            assert!(message.contains("statistics"));
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_connect_builds_request_urls() {
    let harbor = Harbor::connect("harbor.local:8080", Credentials::anonymous()).unwrap();
    let params = RouteParams::new()
        .with("project_id", 3)
        .with("meta_name", "public");
    let request = harbor
        .request(Method::Get, "projects.metadatas.base", &params)
        .unwrap();

    assert_eq!(
        request.url().as_str(),
        "http://harbor.local:8080/api/projects/3/metadatas/public"
    );
    assert!(request.headers().get("authorization").is_none());
}

#[test]
fn test_unknown_route_is_reported_in_call_result() {
    let harbor = Harbor::connect("harbor.local", Credentials::anonymous()).unwrap();
    let result =
        harbor.call::<serde_json::Value>(Method::Get, "nope.nothing", &RouteParams::new(), |r| r);

    assert!(!result.is_success());
    assert!(result.response().is_none());
    assert!(matches!(
        result.errors().unwrap().first(),
        HarborError::RouteNotFound { .. }
    ));
}

#[test]
fn test_from_config_uses_configured_routes() {
    let yaml = r#"
ingress:
  protocol: http
  domain: harbor.local
api:
  root: api/v2.0
  users:
    current: users/me
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    let harbor = Harbor::from_config(&config).unwrap();
    let request = harbor
        .request(Method::Get, "users.current", &RouteParams::new())
        .unwrap();

    assert_eq!(request.url().as_str(), "http://harbor.local/api/v2.0/users/me");
}

#[test]
fn test_client_config_credentials_are_overridable() {
    let config = ClientConfig::new("harbor.local")
        .unwrap()
        .with_credentials(Credentials::basic("a", "b"));
    let harbor = Harbor::builder()
        .client_config(config)
        .credentials(Credentials::basic("user", "pass"))
        .build()
        .unwrap();

    assert_eq!(harbor.client().config().credentials().username(), Some("user"));
}

#[test]
fn test_route_values_cannot_reach_other_endpoints() {
    let mut server = mockito::Server::new();
    let users = server.mock("DELETE", "/api/users/5").expect(0).create();
    let harbor = Harbor::connect(&server.url(), Credentials::anonymous()).unwrap();

    let result = harbor.projects().delete_metadata(1, "../../../users/5");
    let sent = &result.response().unwrap().url;
    assert_eq!(
        sent.path(),
        "/api/projects/1/metadatas/..%2F..%2F..%2Fusers%2F5"
    );

    let traversal = harbor.repositories().delete("../users/5");
    assert!(traversal.response().is_none());
    assert!(matches!(
        traversal.errors().unwrap().first(),
        HarborError::Validation { .. }
    ));

    users.assert();
}

#[test]
fn test_end_to_end_against_mock_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body(r#"[{"project_id": 1, "name": "library"}]"#)
        .create();

    let harbor = Harbor::connect(&server.url(), Credentials::basic("admin", "pw")).unwrap();
    let projects = harbor
        .projects()
        .list(&ListProjectsOptions::default())
        .into_result()
        .unwrap();

    mock.assert();
    assert_eq!(projects[0].name, "library");
}

#[test]
fn test_shared_handle_across_threads() {
    let mut server = mockito::Server::new();
    let mocks: Vec<_> = (0..10)
        .map(|i| {
            server
                .mock("GET", format!("/api/users/{}", i).as_str())
                .with_status(200)
                .with_body(format!(r#"{{"user_id": {}, "username": "user{}"}}"#, i, i))
                .expect(1)
                .create()
        })
        .collect();

    let harbor = Arc::new(Harbor::connect(&server.url(), Credentials::anonymous()).unwrap());
    let handles: Vec<_> = (0..10)
        .map(|i| {
            let harbor = Arc::clone(&harbor);
            thread::spawn(move || harbor.users().get(i).into_result().unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let user = handle.join().unwrap();
        assert_eq!(user.user_id, i as i64);
        assert_eq!(user.username, format!("user{}", i));
    }
    for mock in mocks {
        mock.assert();
    }
}
