// Device Models
// One abstract contract (`Device`) and four concrete kinds.
//
// Each kind has:
// - A fixed purpose stored in its `DeviceBase`
// - Its own rendering, appended after the shared purpose line
// - Its own equality rule over a subset of its fields
//
// `AnyDevice` is the closed sum of all kinds, used wherever devices of
// different kinds live side by side.

pub mod music_player;
pub mod phone;
pub mod phone_variant;
pub mod tablet;

pub use music_player::MusicPlayer;
pub use phone::PhoneDevice;
pub use phone_variant::PhoneDeviceVariant;
pub use tablet::TabletLearningDevice;

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Tolerance used when comparing `minutes_remaining` between phones.
pub const MINUTES_EPSILON: f64 = 0.000001;

// ============================================================================
// DEVICE TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Music player, purpose "music"
    MusicPlayer,

    /// Tablet used for learning, purpose "learning"
    TabletLearningDevice,

    /// Phone, purpose "talking"
    PhoneDevice,

    /// Phone with camera and storage attributes, purpose "talking"
    PhoneDeviceVariant,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::MusicPlayer => "MusicPlayer",
            DeviceType::TabletLearningDevice => "TabletLearningDevice",
            DeviceType::PhoneDevice => "PhoneDevice",
            DeviceType::PhoneDeviceVariant => "PhoneDeviceVariant",
        }
    }

    /// The purpose every device of this kind is constructed with.
    pub fn purpose(&self) -> &'static str {
        match self {
            DeviceType::MusicPlayer => music_player::MUSIC_PLAYER_PURPOSE,
            DeviceType::TabletLearningDevice => tablet::TABLET_PURPOSE,
            DeviceType::PhoneDevice | DeviceType::PhoneDeviceVariant => phone::PHONE_PURPOSE,
        }
    }

    pub fn all() -> [DeviceType; 4] {
        [
            DeviceType::MusicPlayer,
            DeviceType::TabletLearningDevice,
            DeviceType::PhoneDevice,
            DeviceType::PhoneDeviceVariant,
        ]
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DEVICE BASE
// ============================================================================

/// State shared by every device: the immutable purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBase {
    purpose: &'static str,
}

impl DeviceBase {
    pub(crate) fn new(purpose: &'static str) -> Self {
        debug_assert!(!purpose.is_empty(), "device purpose must not be empty");
        DeviceBase { purpose }
    }

    pub fn purpose(&self) -> &'static str {
        self.purpose
    }

    /// Writes the line every rendering starts with.
    pub fn write_purpose(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "The purpose of this IDevice is {}.", self.purpose)
    }
}

impl fmt::Display for DeviceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_purpose(f)
    }
}

// ============================================================================
// DEVICE CONTRACT
// ============================================================================

/// Behavior every concrete device must provide.
///
/// `write_details`, `equals` and `hash_code` have no default body: a new
/// device kind does not compile until it decides how it renders and which
/// of its fields take part in equality. Implementations must keep
/// `equals` and `hash_code` consistent (equal devices hash alike).
pub trait Device: fmt::Debug {
    fn base(&self) -> &DeviceBase;

    fn device_type(&self) -> DeviceType;

    fn purpose(&self) -> &'static str {
        self.base().purpose()
    }

    /// Writes the purpose line followed by the kind-specific lines.
    fn write_details(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    fn details(&self) -> String {
        let mut rendered = String::new();
        // Writing into a String cannot fail
        let _ = self.write_details(&mut rendered);
        rendered
    }

    /// Prints the details to stdout, followed by a blank line.
    fn print_details(&self) {
        println!("{}", self.details());
    }

    /// Value equality against an arbitrary, possibly absent, value.
    ///
    /// Absent values and values of any other concrete type are never equal.
    fn equals(&self, other: Option<&dyn Any>) -> bool;

    fn hash_code(&self) -> u64;

    fn as_any(&self) -> &dyn Any;
}

/// Hash of a single value with the std hasher's fixed keys.
pub(crate) fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Epsilon comparison shared by both phone kinds.
pub(crate) fn minutes_match(a: f64, b: f64) -> bool {
    (a - b).abs() < MINUTES_EPSILON
}

// ============================================================================
// ANY DEVICE
// ============================================================================

/// A device of any kind.
///
/// Equality only holds between two values of the same kind, so a
/// `PhoneDevice` and a `PhoneDeviceVariant` are never equal whatever their
/// minutes. The hash mixes in the kind first: the variant hashes only its
/// minutes, exactly like its parent, and without the tag both would land in
/// the same bucket of a mixed table.
#[derive(Debug, Clone)]
pub enum AnyDevice {
    MusicPlayer(MusicPlayer),
    TabletLearningDevice(TabletLearningDevice),
    PhoneDevice(PhoneDevice),
    PhoneDeviceVariant(PhoneDeviceVariant),
}

impl AnyDevice {
    pub fn as_device(&self) -> &dyn Device {
        match self {
            AnyDevice::MusicPlayer(d) => d,
            AnyDevice::TabletLearningDevice(d) => d,
            AnyDevice::PhoneDevice(d) => d,
            AnyDevice::PhoneDeviceVariant(d) => d,
        }
    }

    pub fn device_type(&self) -> DeviceType {
        self.as_device().device_type()
    }

    pub fn purpose(&self) -> &'static str {
        self.as_device().purpose()
    }

    pub fn details(&self) -> String {
        self.as_device().details()
    }

    pub fn print_details(&self) {
        self.as_device().print_details()
    }

    /// Same as `==`, but accepts an absent right-hand side.
    pub fn equals(&self, other: Option<&AnyDevice>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl PartialEq for AnyDevice {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyDevice::MusicPlayer(a), AnyDevice::MusicPlayer(b)) => a == b,
            (AnyDevice::TabletLearningDevice(a), AnyDevice::TabletLearningDevice(b)) => a == b,
            (AnyDevice::PhoneDevice(a), AnyDevice::PhoneDevice(b)) => a == b,
            (AnyDevice::PhoneDeviceVariant(a), AnyDevice::PhoneDeviceVariant(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for AnyDevice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.device_type().hash(state);
        match self {
            AnyDevice::MusicPlayer(d) => d.hash(state),
            AnyDevice::TabletLearningDevice(d) => d.hash(state),
            AnyDevice::PhoneDevice(d) => d.hash(state),
            AnyDevice::PhoneDeviceVariant(d) => d.hash(state),
        }
    }
}

impl fmt::Display for AnyDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_device().write_details(f)
    }
}

impl From<MusicPlayer> for AnyDevice {
    fn from(device: MusicPlayer) -> Self {
        AnyDevice::MusicPlayer(device)
    }
}

impl From<TabletLearningDevice> for AnyDevice {
    fn from(device: TabletLearningDevice) -> Self {
        AnyDevice::TabletLearningDevice(device)
    }
}

impl From<PhoneDevice> for AnyDevice {
    fn from(device: PhoneDevice) -> Self {
        AnyDevice::PhoneDevice(device)
    }
}

impl From<PhoneDeviceVariant> for AnyDevice {
    fn from(device: PhoneDeviceVariant) -> Self {
        AnyDevice::PhoneDeviceVariant(device)
    }
}

// ============================================================================
// TESTS
// ============================================================================
