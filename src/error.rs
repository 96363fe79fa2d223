//! Error types for the device catalog
//!
//! Device operations themselves never fail; only catalog lookups and
//! updates have error cases.

use crate::devices::DeviceType;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No device registered under this id
    #[error("device not found: {0}")]
    NotFound(Uuid),

    /// An update replaced a device with one of another kind
    #[error("update of {id} changed its kind from {expected} to {actual}")]
    TypeChanged {
        id: Uuid,
        expected: DeviceType,
        actual: DeviceType,
    },
}
