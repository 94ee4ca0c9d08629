#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use monitoring_service::config::{self, StoreBackend};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
store:
  tabel: "predictions" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.store.backend, StoreBackend::Dynamodb);
    assert_eq!(cfg.store.table, "predictions");
    assert_eq!(cfg.store.scan_timeout_ms, 10000);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9090"
store:
  backend: memory
  table: "predictions-staging"
  scan_timeout_ms: 2500
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9090);
    assert_eq!(cfg.store.backend, StoreBackend::Memory);
    assert_eq!(cfg.store.table, "predictions-staging");
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 2\n",
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nstore:\n  table: \"\"\n",
        "version: 1\nstore:\n  scan_timeout_ms: 10\n",
        "version: 1\nstore:\n  backend: postgres\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "CONFIG", "{bad}");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("/nonexistent/monitoring.yaml").expect("defaults");
    assert_eq!(cfg.store.table, "predictions");

    let err = config::load_from_file("/nonexistent/monitoring.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}
