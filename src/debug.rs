/// Writes a trace line to stderr when the `logging` feature is enabled. Compiles to nothing otherwise.
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        $crate::debug::logging(&format!($($arg)*));
    }};
}

pub(crate) use debug;

#[cfg(feature = "logging")]
#[inline]
pub fn logging(s: &str) {
    eprintln!("[probestore] {s}");
}
