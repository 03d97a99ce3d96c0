//! CLI command implementations.

pub mod ask;
pub mod messages;
pub mod seed;

use std::path::PathBuf;

/// Resolve the data directory: flag, then `AIDCONNECT_DATA_DIR`, then `./data`.
pub(crate) fn resolve_data_dir(flag: Option<&str>) -> PathBuf {
    flag.map(PathBuf::from)
        .or_else(|| std::env::var("AIDCONNECT_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}
