//! Internal logging facade.
//!
//! Forwards to `defmt` and/or `log` depending on the enabled features and
//! otherwise compiles the call sites away. Format strings stay within the
//! subset both backends accept.

macro_rules! trace {
    ($($args:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($args)*);
        #[cfg(feature = "log")]
        log::trace!($($args)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = core::format_args!($($args)*);
    }};
}

macro_rules! debug {
    ($($args:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($args)*);
        #[cfg(feature = "log")]
        log::debug!($($args)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = core::format_args!($($args)*);
    }};
}

// Named `warn_` because re-exporting a macro called `warn` is ambiguous with
// the built-in `warn` attribute; the rename below restores the call-site name.
macro_rules! warn_ {
    ($($args:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($args)*);
        #[cfg(feature = "log")]
        log::warn!($($args)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = core::format_args!($($args)*);
    }};
}

pub(crate) use {debug, trace, warn_ as warn};
