/// `rlog!(debug, field = value, "message")` forwards to `tracing::debug!` under target
/// `"rowport"`; without the `tracing` feature it expands to nothing.
#[cfg(feature = "tracing")]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "rowport", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {};
}
