// 📚 Tablet Learning Device - equal when they run the same OS version
//
// "iPadOS 15" and "IPADOS 15" are the same version. Versions are compared
// one character at a time after folding each character to a single
// lowercase form, and the hash is taken over the same folded characters.

use super::{hash_of, Device, DeviceBase, DeviceType};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const TABLET_PURPOSE: &str = "learning";

#[derive(Debug, Clone)]
pub struct TabletLearningDevice {
    base: DeviceBase,
    has_case: bool,
    os_version: String,
}

impl TabletLearningDevice {
    pub fn new(has_case: bool, os_version: impl Into<String>) -> Self {
        TabletLearningDevice {
            base: DeviceBase::new(TABLET_PURPOSE),
            has_case,
            os_version: os_version.into(),
        }
    }

    pub fn has_case(&self) -> bool {
        self.has_case
    }

    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    pub fn set_has_case(&mut self, has_case: bool) {
        self.has_case = has_case;
    }

    /// Changes the equality key, and with it the hash.
    pub fn set_os_version(&mut self, os_version: impl Into<String>) {
        let os_version = os_version.into();
        tracing::trace!(from = %self.os_version, to = %os_version, "tablet os version changed");
        self.os_version = os_version;
    }

    /// The characters of the OS version used for both equality and hashing.
    fn folded_os_version(&self) -> impl Iterator<Item = char> + '_ {
        self.os_version.chars().map(fold_case)
    }
}

/// Folds one character to a single case-insensitive form.
///
/// Context-free, one char in and one char out: a final 'ς' folds like 'Σ',
/// and 'İ' folds to plain 'i' rather than 'i' plus a combining dot.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

impl Device for TabletLearningDevice {
    fn base(&self) -> &DeviceBase {
        &self.base
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::TabletLearningDevice
    }

    fn write_details(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.base.write_purpose(out)?;
        writeln!(out, "This device has a case: {}.", self.has_case)?;
        writeln!(out, "The current operating system version is {}.", self.os_version)
    }

    fn equals(&self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|o| o.downcast_ref::<TabletLearningDevice>()) {
            Some(that) => self == that,
            None => false,
        }
    }

    fn hash_code(&self) -> u64 {
        hash_of(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq for TabletLearningDevice {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.folded_os_version().eq(other.folded_os_version())
    }
}

impl Eq for TabletLearningDevice {}

impl Hash for TabletLearningDevice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded_os_version() {
            c.hash(state);
        }
        // Same terminator `str` hashing uses
        state.write_u8(0xff);
    }
}

impl fmt::Display for TabletLearningDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_details(f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
