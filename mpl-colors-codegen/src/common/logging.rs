// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Log to stderr, filtered by [`EnvKeys::RustLog`]. Stdout is kept for the generated
//! module.

use crate::common::config::EnvKeys;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt,
                         registry::LookupSpan, util::SubscriberInitExt};

/// Filter used when [`EnvKeys::RustLog`] is unset or invalid.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

#[must_use]
pub fn create_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(EnvKeys::RustLog.to_string())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// A compact `fmt` layer writing to stderr, with the env filter attached.
#[must_use]
pub fn create_stderr_layer<S>() -> Box<DynLayer<S>>
where
    S: tracing::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(create_env_filter())
        .boxed()
}

/// Install the global subscriber. Returns `false` if one was already installed, in
/// which case nothing changes, so this is safe to call more than once.
pub fn try_initialize_logging() -> bool {
    tracing_subscriber::registry()
        .with(create_stderr_layer::<Registry>())
        .try_init()
        .is_ok()
}
