#![doc = include_str!("../README.md")]

mod codes;
mod data_op;
mod error;

pub use codes::{
    code_name, RetCode, RET_ASSERTION_FAILURE, RET_MARSHAL_FAILURE, RET_RESPONSE_EXCEPTION,
    RET_UNMARSHAL_FAILURE,
};
pub use data_op::{DataOpErrCode, UnknownDataOpCode};
pub use error::{Error, ERR_ASSERTION_FAILURE};

pub type Result<T, E = Error> = std::result::Result<T, E>;
