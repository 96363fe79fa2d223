// Device Model - Core Library
// A closed hierarchy of consumer devices with per-kind value equality.
// Exposes all modules for use in the demo binary and tests.

pub mod catalog;
pub mod demo;
pub mod devices;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use catalog::{CatalogEntry, DeviceCatalog, DuplicatePair};
pub use demo::{run_equality_demo, EqualityCheck, EqualityReport};
pub use devices::{
    AnyDevice, Device, DeviceBase, DeviceType, MusicPlayer, PhoneDevice, PhoneDeviceVariant,
    TabletLearningDevice, MINUTES_EPSILON,
};
pub use error::{CatalogError, CatalogResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
