use super::*;

fn fallback() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn no_overrides_keeps_fallback() {
    assert_eq!(resolve_addr(fallback(), None, None), Ok(fallback()));
}

#[test]
fn port_override_keeps_host() {
    assert_eq!(resolve_addr(fallback(), None, Some("8080")), Ok("127.0.0.1:8080".parse().unwrap()));
}

#[test]
fn host_override_keeps_port() {
    assert_eq!(resolve_addr(fallback(), Some("0.0.0.0"), None), Ok("0.0.0.0:3000".parse().unwrap()));
}

#[test]
fn blank_overrides_are_ignored() {
    assert_eq!(resolve_addr(fallback(), Some("  "), Some("")), Ok(fallback()));
}

#[test]
fn ipv6_host_is_accepted() {
    assert_eq!(resolve_addr(fallback(), Some("::1"), Some("9000")), Ok("[::1]:9000".parse().unwrap()));
}

#[test]
fn bad_port_is_rejected() {
    assert_eq!(
        resolve_addr(fallback(), None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn bad_host_is_rejected() {
    assert_eq!(
        resolve_addr(fallback(), Some("localhost"), None),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}
