//! crates/emit/src/macros.rs
//! Call-site macros over the process-wide emitter.

/// Emit one event through the process-wide emitter.
///
/// The gate is checked before the arguments are converted, so a disabled
/// channel costs one enablement query and nothing else. Arguments are
/// anything convertible into an [`ArgValue`](crate::ArgValue); the format
/// string travels as a reference, never as text.
///
/// ```
/// use channel::{Channel, Severity};
/// use emit::tracelog;
///
/// let channel = Channel::new("com.example.app", "network");
/// tracelog!(channel, Severity::Error, "connect failed: {}", 61i32);
/// ```
#[macro_export]
macro_rules! tracelog {
    ($channel:expr, $severity:expr, $format:literal $(, $arg:expr)* $(,)?) => {{
        let channel = &$channel;
        let severity = $severity;
        if channel.is_enabled(severity) {
            let args = [$($crate::ArgValue::from($arg)),*];
            $crate::global().log_from(
                channel,
                severity,
                $crate::CallSite::from_location(file!(), line!()),
                $format,
                &args,
            );
        }
    }};
}

/// [`tracelog!`] at default severity.
#[macro_export]
macro_rules! tracelog_default {
    ($channel:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::tracelog!($channel, $crate::Severity::Default, $format $(, $arg)*)
    };
}

/// [`tracelog!`] at info severity.
#[macro_export]
macro_rules! tracelog_info {
    ($channel:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::tracelog!($channel, $crate::Severity::Info, $format $(, $arg)*)
    };
}

/// [`tracelog!`] at debug severity.
#[macro_export]
macro_rules! tracelog_debug {
    ($channel:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::tracelog!($channel, $crate::Severity::Debug, $format $(, $arg)*)
    };
}

/// [`tracelog!`] at error severity.
#[macro_export]
macro_rules! tracelog_error {
    ($channel:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::tracelog!($channel, $crate::Severity::Error, $format $(, $arg)*)
    };
}

/// [`tracelog!`] at fault severity.
#[macro_export]
macro_rules! tracelog_fault {
    ($channel:expr, $format:literal $(, $arg:expr)* $(,)?) => {
        $crate::tracelog!($channel, $crate::Severity::Fault, $format $(, $arg)*)
    };
}
