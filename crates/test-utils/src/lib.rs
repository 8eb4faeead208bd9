//! Shared helpers for shellbar's integration tests.
//!
//! - [`builders`] assemble configs through the same validation as files on disk.
//! - [`scripted_runner`] replaces the shell with canned, optionally gated results.

pub mod builders;
pub mod scripted_runner;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset: shellbar at debug, so a failing
/// test shows every command a widget ran and how it exited.
pub const DEFAULT_TEST_FILTER: &str = "warn,shellbar=debug";

/// Install a test-writer subscriber once per test binary.
///
/// Output is captured per test and only shown for failures (or with
/// `-- --nocapture`). Override the filter with `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Upper bound for anything that waits on a widget's background run.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `f`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("widget did not settle within {TEST_TIMEOUT:?}"))
}
