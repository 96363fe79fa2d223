// 📞 Phone Device - equal when minutes remaining agree within MINUTES_EPSILON
//
// The carrier never takes part in equality.
//
// Known limitation: the hash is taken over the exact bits of
// `minutes_remaining`, while equality tolerates a difference below
// MINUTES_EPSILON. Two phones with 120.0 and 120.0000005 minutes are equal
// but hash differently. For that reason `PhoneDevice` implements
// `PartialEq` and `Hash` but not `Eq`, so it cannot be used as a key in a
// `HashMap`/`HashSet`.

use super::{hash_of, minutes_match, Device, DeviceBase, DeviceType};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const PHONE_PURPOSE: &str = "talking";

#[derive(Debug, Clone)]
pub struct PhoneDevice {
    base: DeviceBase,
    minutes_remaining: f64,
    carrier: String,
}

impl PhoneDevice {
    pub fn new(minutes_remaining: f64, carrier: impl Into<String>) -> Self {
        PhoneDevice {
            base: DeviceBase::new(PHONE_PURPOSE),
            minutes_remaining,
            carrier: carrier.into(),
        }
    }

    pub fn minutes_remaining(&self) -> f64 {
        self.minutes_remaining
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// Changes the equality key, and with it the hash.
    pub fn set_minutes_remaining(&mut self, minutes_remaining: f64) {
        tracing::trace!(
            from = self.minutes_remaining,
            to = minutes_remaining,
            "phone minutes changed"
        );
        self.minutes_remaining = minutes_remaining;
    }

    pub fn set_carrier(&mut self, carrier: impl Into<String>) {
        self.carrier = carrier.into();
    }

    fn write_phone_lines(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "This device has {:.6} minutes remaining.", self.minutes_remaining)?;
        writeln!(out, "The carrier is {}.", self.carrier)
    }

    pub(crate) fn hash_minutes<H: Hasher>(&self, state: &mut H) {
        self.minutes_remaining.to_bits().hash(state);
    }
}

impl Device for PhoneDevice {
    fn base(&self) -> &DeviceBase {
        &self.base
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::PhoneDevice
    }

    fn write_details(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.base.write_purpose(out)?;
        self.write_phone_lines(out)
    }

    /// Only another `PhoneDevice` qualifies; a `PhoneDeviceVariant` is a
    /// different type and is never equal.
    fn equals(&self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|o| o.downcast_ref::<PhoneDevice>()) {
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

impl PartialEq for PhoneDevice {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || minutes_match(self.minutes_remaining, other.minutes_remaining)
    }
}

impl Hash for PhoneDevice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_minutes(state);
    }
}

impl fmt::Display for PhoneDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_details(f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
