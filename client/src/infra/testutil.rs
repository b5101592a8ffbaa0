//! In-process backend for exercising the HTTP clients over a real
//! socket. Each test builds a small axum router describing the
//! endpoints it cares about and gets back a base URL to point a
//! `Transport` at.

use axum::Router;
use tokio::net::TcpListener;

/// Binds an ephemeral loopback port, serves `router` on it in a
/// background task, and returns the base URL. The task is aborted when
/// the test runtime shuts down.
pub async fn spawn_backend(router: Router) -> String {
    // First caller wins; RUST_LOG controls what the clients log.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve backend");
    });

    format!("http://{addr}")
}
