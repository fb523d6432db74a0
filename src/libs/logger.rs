//! Tracing subscriber setup for debug mode.
//!
//! The message macros route through `tracing` when `BERICHT_DEBUG` or
//! `RUST_LOG` is set; this installs the subscriber that makes that
//! output visible. Outside debug mode nothing is installed and the
//! macros print directly.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bericht=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
