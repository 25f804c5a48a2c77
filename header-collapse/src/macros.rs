#[cfg(feature = "tracing")]
macro_rules! hctrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "header_collapse", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hctrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! hcdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "header_collapse", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hcdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! hcwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "header_collapse", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hcwarn {
    ($($tt:tt)*) => {};
}
