use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("BACKEND_ANON_KEY");
        std::env::remove_var("BACKEND_PROBE");
    }
}

#[test]
fn from_env_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend, BackendConfig::default());
    assert!(!cfg.backend.is_configured());
    assert!(cfg.probe);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("BACKEND_URL", "https://abcd.backend.test/");
        std::env::set_var("BACKEND_ANON_KEY", "anon-123");
        std::env::set_var("BACKEND_PROBE", "off");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend.url, "https://abcd.backend.test");
    assert_eq!(cfg.backend.anon_key, "anon-123");
    assert!(!cfg.probe);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "http"));

    unsafe { clear_server_env() };
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_bool("maybe"), None);
}

#[test]
fn env_bool_falls_back_on_garbage() {
    unsafe { std::env::set_var("__TEST_ENV_BOOL__", "sometimes") };
    assert!(env_bool("__TEST_ENV_BOOL__", true));
    assert!(!env_bool("__TEST_ENV_BOOL__", false));
    unsafe { std::env::remove_var("__TEST_ENV_BOOL__") };
    assert!(env_bool("__TEST_ENV_BOOL__", true));
}
