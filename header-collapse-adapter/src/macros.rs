#[cfg(feature = "tracing")]
macro_rules! actrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "header_collapse_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! actrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! acdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "header_collapse_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! acdebug {
    ($($tt:tt)*) => {};
}
