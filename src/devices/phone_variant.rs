// 📱 Phone Device Variant - a phone with camera and storage attributes
//
// Extends PhoneDevice by composition: the wrapped phone keeps minutes,
// carrier and the purpose, the variant adds two immutable fields.
//
// Equal when the camera flags match AND minutes agree within
// MINUTES_EPSILON. Carrier and storage are ignored. The hash covers the
// minutes only, so it matches the parent's hash for the same minutes.

use super::{hash_of, minutes_match, Device, DeviceBase, DeviceType, PhoneDevice};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct PhoneDeviceVariant {
    phone: PhoneDevice,
    high_res_camera: bool,
    storage_gb: i32,
}

impl PhoneDeviceVariant {
    pub fn new(
        minutes_remaining: f64,
        carrier: impl Into<String>,
        high_res_camera: bool,
        storage_gb: i32,
    ) -> Self {
        PhoneDeviceVariant {
            phone: PhoneDevice::new(minutes_remaining, carrier),
            high_res_camera,
            storage_gb,
        }
    }

    /// The phone this variant extends.
    pub fn phone(&self) -> &PhoneDevice {
        &self.phone
    }

    pub fn minutes_remaining(&self) -> f64 {
        self.phone.minutes_remaining()
    }

    pub fn carrier(&self) -> &str {
        self.phone.carrier()
    }

    pub fn set_minutes_remaining(&mut self, minutes_remaining: f64) {
        self.phone.set_minutes_remaining(minutes_remaining);
    }

    pub fn set_carrier(&mut self, carrier: impl Into<String>) {
        self.phone.set_carrier(carrier);
    }

    pub fn has_high_res_camera(&self) -> bool {
        self.high_res_camera
    }

    pub fn storage_gb(&self) -> i32 {
        self.storage_gb
    }
}

impl Device for PhoneDeviceVariant {
    fn base(&self) -> &DeviceBase {
        self.phone.base()
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::PhoneDeviceVariant
    }

    fn write_details(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.phone.write_details(out)?;
        writeln!(out, "This device has a high resolution camera: {}.", self.high_res_camera)?;
        writeln!(out, "This device has {} GB of memory.", self.storage_gb)
    }

    fn equals(&self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|o| o.downcast_ref::<PhoneDeviceVariant>()) {
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

impl PartialEq for PhoneDeviceVariant {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        // Camera first, then the inherited minutes rule
        self.high_res_camera == other.high_res_camera
            && minutes_match(self.minutes_remaining(), other.minutes_remaining())
    }
}

impl Hash for PhoneDeviceVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.phone.hash_minutes(state);
    }
}

impl fmt::Display for PhoneDeviceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_details(f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
