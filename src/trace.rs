//! Feature-gated structured events.
//!
//! With the `tracing` feature enabled, `trace_event!` forwards to
//! `tracing::trace!`; otherwise it expands to nothing and its arguments are
//! never evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
