//! Config file to response headers, through the middleware.

use std::io::Write;

use axum::{routing::get, Router};
use header_guard::config::{load_config, parse_config, GuardWatcher};
use header_guard::http::{apply_guard, shared};
use header_guard::HeaderGuard;

mod common;

use common::{header, CHROME_UA, IE7_UA};

fn app(guard: header_guard::SharedGuard) -> Router {
    apply_guard(Router::new().route("/", get(|| async { "hello" })), guard)
}

#[tokio::test]
async fn test_full_policy_from_toml() {
    let config = parse_config(
        r#"
        frame_options = "ALLOW-FROM http://example.com"
        nosniff = true
        noopen = true

        [xss]
        enabled = true
        "#,
    )
    .unwrap();
    let guard = shared(HeaderGuard::from_config(&config).unwrap());

    let res = common::get(app(guard.clone()), Some(CHROME_UA)).await;
    assert_eq!(header(&res, "x-frame-options"), Some("ALLOW-FROM http://example.com"));
    assert_eq!(header(&res, "x-content-type-options"), Some("nosniff"));
    assert_eq!(header(&res, "x-download-options"), Some("noopen"));
    assert_eq!(header(&res, "x-xss-protection"), Some("1; mode=block"));

    let res = common::get(app(guard), Some(IE7_UA)).await;
    assert_eq!(header(&res, "x-xss-protection"), Some("0"));
}

#[tokio::test]
async fn test_default_policy_sets_nothing() {
    let config = parse_config("").unwrap();
    let guard = shared(HeaderGuard::from_config(&config).unwrap());

    let res = common::get(app(guard), Some(IE7_UA)).await;
    for name in [
        "x-frame-options",
        "x-content-type-options",
        "x-download-options",
        "x-xss-protection",
    ] {
        assert!(header(&res, name).is_none(), "{} should be absent", name);
    }
}

#[tokio::test]
async fn test_handler_header_overwritten() {
    let config = parse_config("frame_options = \"deny\"").unwrap();
    let guard = shared(HeaderGuard::from_config(&config).unwrap());
    let router = Router::new().route(
        "/",
        get(|| async { ([("x-frame-options", "SAMEORIGIN")], "framed") }),
    );

    let res = common::get(apply_guard(router, guard), None).await;
    let values: Vec<_> = res.headers().get_all("x-frame-options").iter().collect();
    assert_eq!(values, vec!["DENY"]);
}

#[tokio::test]
async fn test_reload_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "nosniff = true").unwrap();

    let config = load_config(file.path()).unwrap();
    let guard = shared(HeaderGuard::from_config(&config).unwrap());
    let watcher = GuardWatcher::new(file.path(), guard.clone());

    let res = common::get(app(guard.clone()), None).await;
    assert_eq!(header(&res, "x-content-type-options"), Some("nosniff"));
    assert!(header(&res, "x-frame-options").is_none());

    std::fs::write(file.path(), "frame_options = \"SAMEORIGIN\"\n").unwrap();
    watcher.reload().unwrap();

    let res = common::get(app(guard.clone()), None).await;
    assert!(header(&res, "x-content-type-options").is_none());
    assert_eq!(header(&res, "x-frame-options"), Some("SAMEORIGIN"));

    std::fs::write(file.path(), "frame_options = \"Yes\"\n").unwrap();
    assert!(watcher.reload().is_err());

    let res = common::get(app(guard), None).await;
    assert_eq!(header(&res, "x-frame-options"), Some("SAMEORIGIN"));
}
