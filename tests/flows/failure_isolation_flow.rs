/// Failure Isolation Flow Test
///
/// One host's broken upstream answers must not leak into other hosts,
/// and one broken record type must not suppress the other.

#[path = "../common/mod.rs"]
mod common;
use common::{hostlist, lines_for, run_flow, TestDohServerBuilder, TestHosts};

// ============================================================================
// Failure Isolation Tests
// ============================================================================

#[tokio::test]
async fn test_malformed_json_isolated_to_one_host() {
    // Arrange
    let server = TestDohServerBuilder::new()
        .with_host(TestHosts::EXAMPLE, &[TestHosts::EXAMPLE_V4], &[TestHosts::EXAMPLE_V6])
        .with_malformed("broken.test")
        .with_host(TestHosts::V4_ONLY, &["198.51.100.7"], &[])
        .start()
        .await
        .expect("Failed to start server");
    let file = hostlist("example.test\nbroken.test\nv4only.test\n");

    // Act
    let outcome = run_flow(&server.url(), &file, 3).await;

    // Assert
    assert_eq!(outcome.report.completions.total(), 3);
    assert_eq!(outcome.report.completions.failed, 1);
    assert!(lines_for(&outcome.lines, "broken.test").is_empty());
    assert_eq!(
        lines_for(&outcome.lines, TestHosts::EXAMPLE),
        vec![
            "example.test 93.184.216.34",
            "example.test 2606:2800:220:1:248:1893:25c8:1946"
        ]
    );
    assert_eq!(
        lines_for(&outcome.lines, TestHosts::V4_ONLY),
        vec!["v4only.test 198.51.100.7"]
    );
}

#[tokio::test]
async fn test_aaaa_failure_keeps_ipv4() {
    let server = TestDohServerBuilder::new()
        .with_host(TestHosts::DUAL, &["192.0.2.1"], &["2001:db8::1"])
        .with_failing(TestHosts::DUAL, "AAAA")
        .start()
        .await
        .expect("Failed to start server");
    let file = hostlist("dual.test\n");

    let outcome = run_flow(&server.url(), &file, 1).await;

    assert_eq!(outcome.report.completions.partial, 1);
    assert_eq!(outcome.lines, vec!["dual.test 192.0.2.1".to_string()]);
}

#[tokio::test]
async fn test_a_failure_keeps_ipv6() {
    let server = TestDohServerBuilder::new()
        .with_host(TestHosts::DUAL, &["192.0.2.1"], &["2001:db8::1"])
        .with_failing(TestHosts::DUAL, "A")
        .start()
        .await
        .expect("Failed to start server");
    let file = hostlist("dual.test\n");

    let outcome = run_flow(&server.url(), &file, 1).await;

    assert_eq!(outcome.report.completions.partial, 1);
    assert_eq!(outcome.lines, vec!["dual.test 2001:db8::1".to_string()]);
}

#[tokio::test]
async fn test_unreachable_upstream_completes_every_job() {
    // Arrange: bind then release a port so nothing is listening
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("bind")
        .port();
    let url = format!("http://127.0.0.1:{}/resolve", port);
    let file = hostlist("a.test\nb.test\nc.test\nd.test\n");

    // Act
    let outcome = run_flow(&url, &file, 2).await;

    // Assert: every job signalled, nothing printed
    assert_eq!(outcome.report.completions.failed, 4);
    assert!(outcome.lines.is_empty());
}
