use std::borrow::Cow;

use crate::codes::{
    RetCode, RET_ASSERTION_FAILURE, RET_MARSHAL_FAILURE, RET_RESPONSE_EXCEPTION,
    RET_UNMARSHAL_FAILURE,
};

/// Shared error for failed assertions inside the client.
pub const ERR_ASSERTION_FAILURE: Error =
    Error::from_static(RET_ASSERTION_FAILURE, "AssertionFailure");

/// A TubeMQ error: a return code paired with a message.
///
/// The value is immutable once built. Rendering with [`Display`] gives
/// `code: {code}, msg:{msg}`, with neither field altered.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("code: {code}, msg:{msg}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    code: RetCode,
    msg: Cow<'static, str>,
}

impl Error {
    /// Create an error from any code and message. No validation is done.
    pub fn new(code: RetCode, msg: impl Into<Cow<'static, str>>) -> Error {
        Error {
            code,
            msg: msg.into(),
        }
    }

    /// Same as [`Error::new`] but usable in `const` items.
    pub const fn from_static(code: RetCode, msg: &'static str) -> Error {
        Error {
            code,
            msg: Cow::Borrowed(msg),
        }
    }

    pub fn marshal_failure(msg: impl Into<Cow<'static, str>>) -> Error {
        Error::new(RET_MARSHAL_FAILURE, msg)
    }

    pub fn response_exception(msg: impl Into<Cow<'static, str>>) -> Error {
        Error::new(RET_RESPONSE_EXCEPTION, msg)
    }

    pub fn unmarshal_failure(msg: impl Into<Cow<'static, str>>) -> Error {
        Error::new(RET_UNMARSHAL_FAILURE, msg)
    }

    pub fn assertion_failure(msg: impl Into<Cow<'static, str>>) -> Error {
        Error::new(RET_ASSERTION_FAILURE, msg)
    }

    pub fn code(&self) -> RetCode {
        self.code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Returns true if this error carries `code`.
    pub fn is(&self, code: RetCode) -> bool {
        self.code == code
    }
}

#[cfg(feature = "miette")]
impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match crate::codes::code_name(self.code) {
            Some(name) => Some(Box::new(format!("tubemq::{name}"))),
            None => Some(Box::new(format!("tubemq::{}", self.code))),
        }
    }
}
