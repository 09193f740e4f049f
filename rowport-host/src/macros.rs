/// Same shape as `rowport`'s logging shim, under target `"rowport_host"`.
#[cfg(feature = "tracing")]
macro_rules! hlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "rowport_host", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hlog {
    ($level:ident, $($tt:tt)*) => {};
}
