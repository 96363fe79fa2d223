// 🎵 Music Player - equal when they store the same number of songs
//
// Volume is fixed at construction and plays no part in equality.

use super::{hash_of, Device, DeviceBase, DeviceType};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const MUSIC_PLAYER_PURPOSE: &str = "music";

#[derive(Debug, Clone)]
pub struct MusicPlayer {
    base: DeviceBase,

    /// Number of songs on the device. Negative counts are stored as given.
    songs_stored: i32,

    /// Maximum output volume, never changes after construction
    max_volume_decibels: f64,
}

impl MusicPlayer {
    pub fn new(songs_stored: i32, max_volume_decibels: f64) -> Self {
        MusicPlayer {
            base: DeviceBase::new(MUSIC_PLAYER_PURPOSE),
            songs_stored,
            max_volume_decibels,
        }
    }

    pub fn songs_stored(&self) -> i32 {
        self.songs_stored
    }

    pub fn max_volume_decibels(&self) -> f64 {
        self.max_volume_decibels
    }

    /// Changes the equality key, and with it the hash.
    pub fn set_songs_stored(&mut self, songs_stored: i32) {
        tracing::trace!(from = self.songs_stored, to = songs_stored, "music player songs changed");
        self.songs_stored = songs_stored;
    }
}

impl Device for MusicPlayer {
    fn base(&self) -> &DeviceBase {
        &self.base
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::MusicPlayer
    }

    fn write_details(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.base.write_purpose(out)?;
        writeln!(out, "The number of songs stored is {}.", self.songs_stored)?;
        writeln!(out, "The maximum volume in decibels is {:.6}.", self.max_volume_decibels)
    }

    fn equals(&self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|o| o.downcast_ref::<MusicPlayer>()) {
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

impl PartialEq for MusicPlayer {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.songs_stored == other.songs_stored
    }
}

impl Eq for MusicPlayer {}

impl Hash for MusicPlayer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.songs_stored.hash(state);
    }
}

impl fmt::Display for MusicPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_details(f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
