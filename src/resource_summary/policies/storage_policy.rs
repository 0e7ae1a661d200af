use crate::resource_summary::domain::{format_bytes, normalize_bytes};
use crate::shared::ManifestResult;
use std::fmt;

/// How a StatefulSet row's storage is chosen from its volume claim templates
///
/// - `Last`: the last template's request, as written (default)
/// - `Max`: the largest request by bytes, as written
/// - `Sum`: the byte total of all requests, rendered with a binary suffix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoragePolicy {
    #[default]
    Last,
    Max,
    Sum,
}

impl StoragePolicy {
    /// Picks the row storage from template requests in declaration order.
    /// No templates yields the empty string.
    ///
    /// # Errors
    /// `Max` and `Sum` parse every request and fail on an invalid quantity.
    pub fn select(self, requests: &[String]) -> ManifestResult<String> {
        if requests.is_empty() {
            return Ok(String::new());
        }

        match self {
            StoragePolicy::Last => Ok(requests.last().cloned().unwrap_or_default()),
            StoragePolicy::Max => {
                let mut best: Option<(u64, &String)> = None;
                for request in requests {
                    let bytes = normalize_bytes(request)?;
                    if best.map_or(true, |(current, _)| bytes > current) {
                        best = Some((bytes, request));
                    }
                }
                Ok(best.map(|(_, request)| request.clone()).unwrap_or_default())
            }
            StoragePolicy::Sum => {
                let mut total: u64 = 0;
                for request in requests {
                    total = total.saturating_add(normalize_bytes(request)?);
                }
                Ok(format_bytes(total))
            }
        }
    }
}

impl std::str::FromStr for StoragePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last" => Ok(StoragePolicy::Last),
            "max" => Ok(StoragePolicy::Max),
            "sum" => Ok(StoragePolicy::Sum),
            _ => Err(format!(
                "Invalid storage policy: {}. Please specify 'last', 'max' or 'sum'",
                s
            )),
        }
    }
}

impl fmt::Display for StoragePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoragePolicy::Last => write!(f, "last"),
            StoragePolicy::Max => write!(f, "max"),
            StoragePolicy::Sum => write!(f, "sum"),
        }
    }
}
