//! Error types for the GMAB optimizer core.
//!
//! The core never panics in response to caller input. Invalid configuration,
//! a failing objective, and broken invariants are all represented as
//! [`GmabError`] variants so a caller can match on `.kind()` or just bubble
//! the error up with `?`.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

pub type GmabResult<T> = Result<T, GmabError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfig,
    Objective,
    Internal,
    Context,
}

/// A cheaply-cloneable, possibly-`'static` error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrString(Cow<'static, str>);

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: Into<Cow<'static, str>>> From<T> for ErrString {
    fn from(v: T) -> Self {
        Self(v.into())
    }
}

#[derive(Debug)]
pub enum GmabError {
    /// A structural configuration problem: a rate out of `[0, 1]`, a zero
    /// population size, a bounds/population-size mismatch, an out-of-range
    /// `top_k`, or a budget too small to evaluate the initial population.
    InvalidConfig { message: ErrString },

    /// The caller-supplied objective returned an error, or returned a
    /// non-finite reward (NaN or ±infinity).
    Objective { message: ErrString },

    /// An internal invariant was violated (duplicate genome in the
    /// population, a pull counter that should never have gone negative).
    /// Seeing this means there is a bug in the engine itself.
    Internal { message: ErrString },

    /// Wraps another error with additional context, built by
    /// [`ResultExt::with_context`].
    Context {
        context: ErrorContext,
        source: Box<GmabError>,
    },
}

impl GmabError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            Self::Objective { .. } => ErrorKind::Objective,
            Self::Internal { .. } => ErrorKind::Internal,
            Self::Context { .. } => ErrorKind::Context,
        }
    }

    pub fn with_context(self, msg: impl Into<String>) -> Self {
        GmabError::Context {
            context: ErrorContext::new(msg),
            source: Box::new(self),
        }
    }
}

impl Display for GmabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { message } => write!(f, "invalid configuration: {message}"),
            Self::Objective { message } => write!(f, "objective error: {message}"),
            Self::Internal { message } => write!(f, "internal invariant violated: {message}"),
            Self::Context { context, source } => write!(f, "{context}\ncaused by: {source}"),
        }
    }
}

impl std::error::Error for GmabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Context { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ErrorContext {
    message: String,
}

impl ErrorContext {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub trait ResultExt<T> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> GmabResult<T>;
}

impl<T, E: Into<GmabError>> ResultExt<T> for Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> GmabResult<T> {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[doc(hidden)]
pub mod __private {
    #[inline]
    #[cold]
    #[must_use]
    pub fn must_use<E>(e: E) -> E {
        e
    }
}

#[macro_export]
macro_rules! gmab_err {
    (InvalidConfig: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::GmabError::InvalidConfig { message: format!($fmt, $($arg),*).into() })
    };
    (Objective: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::GmabError::Objective { message: format!($fmt, $($arg),*).into() })
    };
    (Internal: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::GmabError::Internal { message: format!($fmt, $($arg),*).into() })
    };
    ($variant:ident: $msg:expr $(,)?) => {{
        $crate::__private::must_use($crate::GmabError::Internal { message: $msg.into() })
    }};
}

#[macro_export]
macro_rules! gmab_bail {
    ($($tt:tt)+) => { return Err($crate::gmab_err!($($tt)+)) };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($tt:tt)+) => {
        if !$cond { $crate::gmab_bail!($($tt)+); }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_readable() {
        let err = gmab_err!(InvalidConfig: "population_size must be positive, got {}", 0);
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.to_string().contains("population_size"));
    }

    #[test]
    fn context_wraps_source() {
        let base = gmab_err!(Objective: "reward was NaN");
        let wrapped = base.with_context("while evaluating arm 3");
        assert_eq!(wrapped.kind(), ErrorKind::Context);
        assert!(wrapped.to_string().contains("while evaluating arm 3"));
        assert!(wrapped.to_string().contains("reward was NaN"));
    }

    #[test]
    fn ensure_macro_bails_on_false() {
        fn check(n: usize) -> GmabResult<()> {
            ensure!(n > 0, InvalidConfig: "n must be positive, got {}", n);
            Ok(())
        }

        assert!(check(1).is_ok());
        let err = check(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
