//! What a listing does with records that fail to decode.

use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogItem;

use super::Result;

/// Policy applied by `get_all_items` to records that fail to decode.
///
/// With [`Skip`](Self::Skip) a listing returns every record that does decode
/// and logs the rest, so one corrupt record never hides the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeFailurePolicy {
    /// Log the failure and leave the record out of the result.
    #[default]
    Skip,
    /// Fail the whole listing with the first decode error.
    Fail,
}

impl FromStr for DecodeFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown decode failure policy '{other}' (expected 'skip' or 'fail')"
            )),
        }
    }
}

impl fmt::Display for DecodeFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Collects independently decoded records into a listing.
pub fn collect_listing<I>(decoded: I, policy: DecodeFailurePolicy) -> Result<Vec<CatalogItem>>
where
    I: IntoIterator<Item = Result<CatalogItem>>,
{
    let mut items = Vec::new();

    for result in decoded {
        match result {
            Ok(item) => items.push(item),
            Err(err) => match policy {
                DecodeFailurePolicy::Skip => {
                    tracing::warn!(error = %err, "Skipping product record that failed to decode");
                }
                DecodeFailurePolicy::Fail => return Err(err),
            },
        }
    }

    Ok(items)
}
