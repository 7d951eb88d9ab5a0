use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.ingress.protocol, "https");
    assert!(config.ingress.domain.is_empty());
    assert!(config.management.user.name.is_empty());
    assert_eq!(config.api.root, "api");
    assert_eq!(config.network.timeout, 30);
    assert_eq!(config.network.max_idle_per_host, 10);
    assert!(config.network.user_agent.is_none());
}

#[test]
fn test_default_route_table_matches_builtin_routes() {
    let table = Config::default().route_table().unwrap();
    assert_eq!(table, RouteTable::with_defaults().unwrap());
}

#[test]
fn test_from_str_empty_yaml() {
    let config = Config::from_yaml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_str_partial_yaml() {
    let yaml = r#"
ingress:
  protocol: http
  domain: harbor.local:8080
management:
  user:
    name: admin
    password: Harbor12345
network:
  timeout: 60
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.base_url(), "http://harbor.local:8080");
    assert_eq!(config.credentials(), Credentials::basic("admin", "Harbor12345"));
    assert_eq!(config.network.timeout, 60);
    // Untouched sections keep their defaults
    assert_eq!(config.api.root, "api");
    assert_eq!(config.network.max_idle_per_host, 10);
}

#[test]
fn test_route_override_keeps_other_defaults() {
    let yaml = r#"
api:
  root: api/v2.0
  projects:
    base: projects/{project_name}
  custom:
    health: health
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    let table = config.route_table().unwrap();

    assert_eq!(config.api.root, "api/v2.0");
    assert_eq!(table.template("projects.base"), Some("projects/{project_name}"));
    assert_eq!(table.template("projects.root"), Some("projects"));
    assert_eq!(table.template("custom.health"), Some("health"));
    assert_eq!(table.template("statistics"), Some("statistics"));
}

#[test]
fn test_malformed_route_template_is_config_error() {
    let yaml = r#"
api:
  projects:
    base: projects/{project_id
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    assert!(matches!(
        config.route_table(),
        Err(HarborError::Config { .. })
    ));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = Config::from_yaml_str("network: [unclosed");
    assert!(matches!(result, Err(HarborError::Config { .. })));
}

#[test]
fn test_wrong_type_is_config_error() {
    let result = Config::from_yaml_str("network:\n  timeout: soon\n");
    assert!(matches!(result, Err(HarborError::Config { .. })));
}

#[test]
fn test_credentials_anonymous_without_user() {
    assert_eq!(Config::default().credentials(), Credentials::Anonymous);
}

#[test]
fn test_to_client_config() {
    let yaml = r#"
ingress:
  domain: harbor.example.com
management:
  user:
    name: admin
    password: secret
api:
  root: /api/
network:
  timeout: 5
  user_agent: harbor-tests
"#;
    let client_config = Config::from_yaml_str(yaml)
        .unwrap()
        .to_client_config()
        .unwrap();

    assert_eq!(client_config.base_url().as_str(), "https://harbor.example.com/");
    assert_eq!(client_config.api_root(), "api");
    assert_eq!(client_config.timeout_seconds, 5);
    assert_eq!(client_config.user_agent(), Some("harbor-tests"));
    assert_eq!(client_config.credentials().username(), Some("admin"));
}

#[test]
fn test_to_client_config_requires_domain() {
    let result = Config::default().to_client_config();
    assert!(matches!(result, Err(HarborError::Config { .. })));
}

#[test]
fn test_to_client_config_rejects_bad_domain() {
    let config = Config::from_yaml_str("ingress:\n  domain: \"bad host\"\n").unwrap();
    assert!(matches!(
        config.to_client_config(),
        Err(HarborError::InvalidUrl { .. })
    ));
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = Config::load_with_env(None, Some(config::Map::new())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "ingress:\n  domain: from-file.local\nnetwork:\n  timeout: 12").unwrap();

    let config = Config::load_with_env(Some(file.path()), Some(config::Map::new())).unwrap();
    assert_eq!(config.ingress.domain, "from-file.local");
    assert_eq!(config.network.timeout, 12);
}

#[test]
fn test_load_missing_file_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");

    match Config::load_with_env(Some(&missing), Some(config::Map::new())) {
        Err(HarborError::Config { path, .. }) => {
            assert_eq!(path, Some(missing.display().to_string()));
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_environment_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "ingress:\n  domain: from-file.local").unwrap();

    let mut env = config::Map::new();
    env.insert(
        "HARBOR__INGRESS__DOMAIN".to_string(),
        "from-env.local".to_string(),
    );
    env.insert(
        "HARBOR__MANAGEMENT__USER__NAME".to_string(),
        "robot".to_string(),
    );

    let config = Config::load_with_env(Some(file.path()), Some(env)).unwrap();
    assert_eq!(config.ingress.domain, "from-env.local");
    assert_eq!(config.management.user.name, "robot");
}

#[test]
fn test_management_user_debug_redacts_password() {
    let user = ManagementUser {
        name: "admin".to_string(),
        password: "hunter2".to_string(),
    };
    let debug = format!("{:?}", user);
    assert!(!debug.contains("hunter2"));
}
