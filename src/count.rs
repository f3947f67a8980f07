use std::ffi::OsStr;

use crate::error::{Error, Result};

/// What the binary does for a given count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Count was omitted or zero.
    Usage,
    /// Any non-zero count. Negative counts run zero iterations.
    Run(i64),
}

impl Plan {
    pub fn from_count(n: i64) -> Self {
        match n {
            0 => Plan::Usage,
            n => Plan::Run(n),
        }
    }
}

/// Parses the optional positional count. A missing argument counts as zero;
/// anything that is not UTF-8 decimal text is rejected.
pub fn parse_count(arg: Option<&OsStr>) -> Result<i64> {
    let Some(raw) = arg else {
        return Ok(0);
    };
    raw.to_str()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| Error::InvalidArgument {
            input: raw.to_string_lossy().into_owned(),
        })
}
