//! Structured trace events, compiled in only with the `tracing` feature.

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// With the feature disabled the arguments are not evaluated.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_event;
