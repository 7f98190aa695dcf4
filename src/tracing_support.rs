//! Logging support.
//!
//! When the `tracing` feature is enabled, graph construction and decomposition
//! emit `tracing` spans and events.  When it is disabled the same macros
//! expand to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub use tracing::{debug, debug_span, trace};

    /// Installs a formatting subscriber that writes through the test harness.
    /// Calling it more than once is harmless.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __graphirino_noop_span {
        ($($tokens:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __graphirino_noop_event {
        ($($tokens:tt)*) => {
            ()
        };
    }

    pub use crate::__graphirino_noop_event as debug;
    pub use crate::__graphirino_noop_event as trace;
    pub use crate::__graphirino_noop_span as debug_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
