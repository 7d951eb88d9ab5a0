use super::*;

#[test]
fn test_credentials_anonymous() {
    let creds = Credentials::anonymous();
    assert_eq!(creds, Credentials::Anonymous);
    assert_eq!(creds.to_header_value(), None);
    assert_eq!(creds.username(), None);
}

#[test]
fn test_credentials_default_is_anonymous() {
    assert_eq!(Credentials::default(), Credentials::Anonymous);
}

#[test]
fn test_credentials_basic() {
    let creds = Credentials::basic("testuser", "testpass");
    match &creds {
        Credentials::Basic { username, password } => {
            assert_eq!(username, "testuser");
            assert_eq!(password, "testpass");
        }
        _ => panic!("Expected Basic credentials"),
    }

    let header = creds.to_header_value().unwrap();
    assert!(header.starts_with("Basic "));
}

#[test]
fn test_basic_header_encoding() {
    // admin:Harbor12345
    let creds = Credentials::basic("admin", "Harbor12345");
    assert_eq!(
        creds.to_header_value().unwrap(),
        "Basic YWRtaW46SGFyYm9yMTIzNDU="
    );
}

#[test]
fn test_debug_redacts_password() {
    let creds = Credentials::basic("admin", "s3cret");
    let debug = format!("{:?}", creds);
    assert!(debug.contains("admin"));
    assert!(!debug.contains("s3cret"));
    assert!(debug.contains("<redacted>"));
}
