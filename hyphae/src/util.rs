use core::fmt;

macro_rules! test_trace {
    ($($tt:tt)*) => {
        #[cfg(test)]
        tracing::trace!($($tt)*)
    }
}

/// Formats a sequence as `[a, b, c]`, using each element's `Display`
/// implementation.
///
/// The iterator is cloned on every call to `fmt`, so the wrapper can be
/// formatted any number of times.
pub(crate) struct FmtList<I> {
    iter: I,
}

// === impl FmtList ===

impl<I> FmtList<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> fmt::Display for FmtList<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut iter = self.iter.clone();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(&first, f)?;
            for item in iter {
                f.write_str(", ")?;
                fmt::Display::fmt(&item, f)?;
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
pub(crate) fn assert_send_sync<T: Send + Sync>() {}

#[cfg(test)]
pub(crate) fn trace_init() -> tracing::dispatcher::DefaultGuard {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .with_timer(())
        .set_default()
}
