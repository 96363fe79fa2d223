// 🗂️ Device Catalog - stable identity + value equality over mixed devices
//
// "A device's UUID is IDENTITY (never changes), its fields are VALUES"
//
// Two entries can hold equal devices (same songs, same OS version, ...)
// and still be different entries. The catalog keeps both notions apart:
// - lookups by id use the UUID
// - lookups by value scan with the devices' own equality
//
// There is no hash index. Setters change equality keys, so a device's hash
// bucket would go stale the moment `update` mutates it.

use crate::devices::{
    AnyDevice, DeviceType, MusicPlayer, PhoneDevice, PhoneDeviceVariant, TabletLearningDevice,
};
use crate::error::{CatalogError, CatalogResult};
use tracing::{debug, info, warn};
use uuid::Uuid;

// ============================================================================
// CATALOG ENTRY
// ============================================================================

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Stable identity (UUID) - NEVER changes
    pub id: Uuid,

    /// The device itself (mutable through `DeviceCatalog::update`)
    pub device: AnyDevice,
}

/// Two entries whose devices are equal by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicatePair {
    /// Entry registered first
    pub first: Uuid,

    /// Entry registered later, equal to `first`
    pub second: Uuid,
}

// ============================================================================
// DEVICE CATALOG
// ============================================================================

/// In-memory registry of devices of any kind, in registration order.
#[derive(Debug, Default)]
pub struct DeviceCatalog {
    entries: Vec<CatalogEntry>,
}

impl DeviceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        DeviceCatalog {
            entries: Vec::new(),
        }
    }

    /// Create a catalog holding the demonstration devices, three per kind
    pub fn with_demo_devices() -> Self {
        let mut catalog = DeviceCatalog::new();
        catalog.register_demo_devices();
        catalog
    }

    fn register_demo_devices(&mut self) {
        // Music players: 300 songs @ 80 dB, 400 @ 85 dB, 300 @ 70 dB
        self.register(MusicPlayer::new(300, 80.0));
        self.register(MusicPlayer::new(400, 85.0));
        self.register(MusicPlayer::new(300, 70.0));

        // Tablets
        self.register(TabletLearningDevice::new(true, "iPadOS 15"));
        self.register(TabletLearningDevice::new(false, "iPadOS 14"));
        self.register(TabletLearningDevice::new(true, "iPadOS 15"));

        // Phones
        self.register(PhoneDevice::new(120.0, "Verizon"));
        self.register(PhoneDevice::new(180.0, "T-Mobile"));
        self.register(PhoneDevice::new(120.0, "AT&T"));

        // Phone variants: camera / storage combinations
        self.register(PhoneDeviceVariant::new(100.0, "Verizon", true, 512));
        self.register(PhoneDeviceVariant::new(100.0, "Verizon", true, 256));
        self.register(PhoneDeviceVariant::new(100.0, "Verizon", false, 512));
    }

    /// Register a device under a fresh id
    pub fn register(&mut self, device: impl Into<AnyDevice>) -> Uuid {
        let device = device.into();
        let id = Uuid::new_v4();

        debug!(%id, device_type = %device.device_type(), "registered device");
        self.entries.push(CatalogEntry { id, device });
        id
    }

    /// Remove a device, returning it
    pub fn remove(&mut self, id: Uuid) -> CatalogResult<AnyDevice> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let entry = self.entries.remove(position);
        debug!(%id, device_type = %entry.device.device_type(), "removed device");
        Ok(entry.device)
    }

    /// Mutate a device in place
    ///
    /// The closure may use any setter, but must keep the device's kind. If it
    /// swaps in a device of another kind, the previous device is restored and
    /// `TypeChanged` is returned.
    pub fn update<F>(&mut self, id: Uuid, update_fn: F) -> CatalogResult<()>
    where
        F: FnOnce(&mut AnyDevice),
    {
        let entry = match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry,
            None => {
                warn!(%id, "update of unknown device");
                return Err(CatalogError::NotFound(id));
            }
        };

        let expected = entry.device.device_type();
        let previous = entry.device.clone();
        update_fn(&mut entry.device);

        let actual = entry.device.device_type();
        if actual != expected {
            entry.device = previous;
            warn!(%id, %expected, %actual, "update changed device kind, reverted");
            return Err(CatalogError::TypeChanged {
                id,
                expected,
                actual,
            });
        }

        info!(%id, device_type = %actual, "updated device");
        Ok(())
    }

    /// Find a device by id
    pub fn find_by_id(&self, id: Uuid) -> Option<&AnyDevice> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.device)
    }

    /// Find the first entry whose device equals `device` by value
    pub fn find_equal(&self, device: &AnyDevice) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.device == device)
    }

    pub fn contains_equal(&self, device: &AnyDevice) -> bool {
        self.find_equal(device).is_some()
    }

    /// All entries in registration order
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind
    pub fn by_type(&self, device_type: DeviceType) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.device.device_type() == device_type)
            .collect()
    }

    /// Entries with a given purpose ("talking" covers both phone kinds)
    pub fn by_purpose(&self, purpose: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.device.purpose() == purpose)
            .collect()
    }

    /// Every pair of entries whose devices are equal by value
    ///
    /// Pairs are listed in registration order. Phone equality is not
    /// transitive (the epsilon window can chain), so each pair is checked
    /// directly instead of grouping.
    pub fn duplicates(&self) -> Vec<DuplicatePair> {
        let mut pairs = Vec::new();

        for (i, first) in self.entries.iter().enumerate() {
            for second in &self.entries[i + 1..] {
                if first.device == second.device {
                    pairs.push(DuplicatePair {
                        first: first.id,
                        second: second.id,
                    });
                }
            }
        }

        pairs
    }

    /// Number of entries left after dropping every entry equal to an earlier kept one
    pub fn distinct_count(&self) -> usize {
        let mut kept: Vec<&AnyDevice> = Vec::new();

        for entry in &self.entries {
            if !kept.iter().any(|device| **device == entry.device) {
                kept.push(&entry.device);
            }
        }

        kept.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
