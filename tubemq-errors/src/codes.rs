//! Return codes reported by the TubeMQ client.
//!
//! Downstream code matches on these integers, so their values are fixed.

/// Numeric tag carried by every [`Error`](crate::Error).
pub type RetCode = i32;

/// Encoding a request or a payload failed.
pub const RET_MARSHAL_FAILURE: RetCode = 1;
/// The remote side answered with an exception.
pub const RET_RESPONSE_EXCEPTION: RetCode = 2;
/// Decoding a response or a payload failed.
pub const RET_UNMARSHAL_FAILURE: RetCode = 3;
/// An internal assertion did not hold.
pub const RET_ASSERTION_FAILURE: RetCode = 4;

/// Name of a known client return code, `None` for anything else.
pub const fn code_name(code: RetCode) -> Option<&'static str> {
    match code {
        RET_MARSHAL_FAILURE => Some("MarshalFailure"),
        RET_RESPONSE_EXCEPTION => Some("ResponseException"),
        RET_UNMARSHAL_FAILURE => Some("UnMarshalFailure"),
        RET_ASSERTION_FAILURE => Some("AssertionFailure"),
        _ => None,
    }
}
