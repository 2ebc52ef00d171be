//! Result codes of operations against the master metadata store.
use strum::IntoEnumIterator;

use crate::error::Error;

/// Outcome of a metadata store read or write.
///
/// With the `serde` feature, variants use the names the master sends on the
/// wire (`DERR_NOT_EXIST`, `STATUS_DISABLE`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataOpErrCode {
    #[strum(serialize = "Success.")]
    #[cfg_attr(feature = "serde", serde(rename = "DERR_SUCCESS"))]
    Success,
    #[strum(serialize = "Record not exist.")]
    #[cfg_attr(feature = "serde", serde(rename = "DERR_NOT_EXIST"))]
    NotExist,
    #[strum(serialize = "Record has existed.")]
    #[cfg_attr(feature = "serde", serde(rename = "DERR_EXISTED"))]
    Existed,
    #[strum(serialize = "Record not changed.")]
    #[cfg_attr(feature = "serde", serde(rename = "DERR_UNCHANGED"))]
    Unchanged,
    #[strum(serialize = "Store layer throw exception.")]
    #[cfg_attr(feature = "serde", serde(rename = "DERR_STORE_ABNORMAL"))]
    StoreAbnormal,
    #[strum(serialize = "Disable.")]
    #[cfg_attr(feature = "serde", serde(rename = "STATUS_DISABLE"))]
    StatusDisable,
}

/// A code that does not belong to any [`DataOpErrCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown data operate error code {0}")]
pub struct UnknownDataOpCode(pub i32);

impl DataOpErrCode {
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 200,
            Self::NotExist => 401,
            Self::Existed => 402,
            Self::Unchanged => 403,
            Self::StoreAbnormal => 501,
            Self::StatusDisable => 0,
        }
    }

    pub fn description(self) -> &'static str {
        self.into()
    }

    /// Look up the variant carrying `code`.
    pub fn from_code(code: i32) -> Result<DataOpErrCode, UnknownDataOpCode> {
        match Self::iter().find(|status| status.code() == code) {
            Some(status) => Ok(status),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(code, "rejected unknown data operate error code");
                Err(UnknownDataOpCode(code))
            }
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl TryFrom<i32> for DataOpErrCode {
    type Error = UnknownDataOpCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        DataOpErrCode::from_code(code)
    }
}

impl From<DataOpErrCode> for Error {
    fn from(status: DataOpErrCode) -> Self {
        Error::from_static(status.code(), status.description())
    }
}
