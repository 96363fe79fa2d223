//! Device generators shared by the property modules.

use device_model::{
    AnyDevice, MusicPlayer, PhoneDevice, PhoneDeviceVariant, TabletLearningDevice,
};
use proptest::prelude::*;

pub fn music_player() -> impl Strategy<Value = MusicPlayer> {
    (0i32..5_000, 0.0f64..140.0).prop_map(|(songs, volume)| MusicPlayer::new(songs, volume))
}

/// OS names mixing ASCII, Greek (including final sigma) and Turkish letters
pub fn os_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-zΑ-ΡΣ-Ωα-ωİıÇçŞşÖöÜü]{2,8}").unwrap()
}

pub fn os_version() -> impl Strategy<Value = String> {
    (os_name(), 0u8..100).prop_map(|(name, number)| format!("{} {}", name, number))
}

/// The only char an iterator yields, if it yields exactly one
fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Swaps the case of every char whose flip is set, where a one-char swap exists
pub fn recased(os: &str, flips: &[bool]) -> String {
    os.chars()
        .zip(flips.iter().cycle())
        .map(|(c, &flip)| {
            if !flip {
                return c;
            }
            single(c.to_uppercase())
                .filter(|&u| u != c)
                .or_else(|| single(c.to_lowercase()).filter(|&l| l != c))
                .unwrap_or(c)
        })
        .collect()
}

/// Two spellings of the same OS version differing only in letter case
pub fn recased_os_versions() -> impl Strategy<Value = (String, String)> {
    (
        os_version(),
        proptest::collection::vec(any::<bool>(), 1..12),
        proptest::collection::vec(any::<bool>(), 1..12),
    )
        .prop_map(|(os, flips_a, flips_b)| (recased(&os, &flips_a), recased(&os, &flips_b)))
}

pub fn tablet() -> impl Strategy<Value = TabletLearningDevice> {
    (any::<bool>(), os_version())
        .prop_map(|(has_case, os)| TabletLearningDevice::new(has_case, os))
}

pub fn carrier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Verizon".to_string()),
        Just("T-Mobile".to_string()),
        Just("AT&T".to_string()),
        proptest::string::string_regex("[A-Za-z]{1,12}").unwrap(),
    ]
}

/// Minutes on a whole-hundredth grid, so distinct values are far beyond epsilon
pub fn minutes() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|hundredths| f64::from(hundredths) / 100.0)
}

pub fn phone() -> impl Strategy<Value = PhoneDevice> {
    (minutes(), carrier()).prop_map(|(mins, carrier)| PhoneDevice::new(mins, carrier))
}

pub fn phone_variant() -> impl Strategy<Value = PhoneDeviceVariant> {
    let storage = prop_oneof![Just(64), Just(128), Just(256), Just(512)];

    (minutes(), carrier(), any::<bool>(), storage).prop_map(|(mins, carrier, camera, storage)| {
        PhoneDeviceVariant::new(mins, carrier, camera, storage)
    })
}

pub fn any_device() -> impl Strategy<Value = AnyDevice> {
    prop_oneof![
        music_player().prop_map(AnyDevice::from),
        tablet().prop_map(AnyDevice::from),
        phone().prop_map(AnyDevice::from),
        phone_variant().prop_map(AnyDevice::from),
    ]
}
