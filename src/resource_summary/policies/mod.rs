mod error_policy;
mod storage_policy;

pub use error_policy::ErrorPolicy;
pub use storage_policy::StoragePolicy;
