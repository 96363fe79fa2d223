//! Property tests for per-kind value equality.

use std::any::Any;

use proptest::prelude::*;

use device_model::{
    AnyDevice, Device, MusicPlayer, PhoneDevice, PhoneDeviceVariant, TabletLearningDevice,
};

use crate::strategies::{
    any_device, carrier, minutes, music_player, os_name, phone, phone_variant,
    recased_os_versions,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every device equals itself and a clone of itself.
    #[test]
    fn property_equality_is_reflexive(device in any_device()) {
        prop_assert!(device == device);
        prop_assert!(device.equals(Some(&device)));
        prop_assert!(device.as_device().equals(Some(device.as_device().as_any())));
        prop_assert_eq!(&device, &device.clone());
    }

    /// PROPERTY: `a == b` exactly when `b == a`, across all kinds.
    #[test]
    fn property_equality_is_symmetric(a in any_device(), b in any_device()) {
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(
            a.as_device().equals(Some(b.as_device().as_any())),
            b.as_device().equals(Some(a.as_device().as_any()))
        );
    }

    /// PROPERTY: absent values are never equal.
    #[test]
    fn property_absent_is_never_equal(device in any_device()) {
        prop_assert!(!device.equals(None));
        prop_assert!(!device.as_device().equals(None));
    }

    /// PROPERTY: devices of different kinds are never equal.
    #[test]
    fn property_different_kinds_never_equal(a in any_device(), b in any_device()) {
        prop_assume!(a.device_type() != b.device_type());
        prop_assert_ne!(&a, &b);
        prop_assert!(!a.as_device().equals(Some(b.as_device().as_any())));
    }

    /// PROPERTY: unrelated values (plain numbers and strings) are never equal.
    #[test]
    fn property_unrelated_types_never_equal(
        device in any_device(),
        n in any::<i32>(),
        s in ".{0,16}",
    ) {
        prop_assert!(!device.as_device().equals(Some(&n as &dyn Any)));
        prop_assert!(!device.as_device().equals(Some(&s as &dyn Any)));
    }

    /// PROPERTY: music players compare songs only.
    #[test]
    fn property_music_player_ignores_volume(
        songs in 0i32..5_000,
        volume_a in 0.0f64..140.0,
        volume_b in 0.0f64..140.0,
        other in music_player(),
    ) {
        prop_assert_eq!(MusicPlayer::new(songs, volume_a), MusicPlayer::new(songs, volume_b));
        prop_assert_eq!(
            MusicPlayer::new(songs, volume_a) == other,
            songs == other.songs_stored()
        );
    }

    /// PROPERTY: tablet OS versions compare without regard to case.
    #[test]
    fn property_tablet_os_version_case_insensitive(
        (os_a, os_b) in recased_os_versions(),
        case_a in any::<bool>(),
        case_b in any::<bool>(),
    ) {
        let a = TabletLearningDevice::new(case_a, os_a);
        let b = TabletLearningDevice::new(case_b, os_b);
        prop_assert_eq!(&a, &b);
    }

    /// PROPERTY: tablets with the same OS name but different version numbers differ.
    #[test]
    fn property_tablet_distinct_versions(name in os_name(), n in 0u8..100, m in 0u8..100) {
        prop_assume!(n != m);
        let a = TabletLearningDevice::new(true, format!("{} {}", name, n));
        let b = TabletLearningDevice::new(true, format!("{} {}", name, m));
        prop_assert_ne!(a, b);
    }

    /// PROPERTY: phones ignore the carrier and tolerate sub-epsilon drift.
    #[test]
    fn property_phone_ignores_carrier_within_epsilon(
        mins in minutes(),
        carrier_a in carrier(),
        carrier_b in carrier(),
        drift in -4e-7f64..4e-7,
    ) {
        prop_assert_eq!(
            PhoneDevice::new(mins, carrier_a),
            PhoneDevice::new(mins + drift, carrier_b)
        );
    }

    /// PROPERTY: phones whose minutes differ by a hundredth or more differ.
    #[test]
    fn property_phone_distinct_minutes(a in phone(), b in phone()) {
        prop_assume!(a.minutes_remaining() != b.minutes_remaining());
        prop_assert_ne!(a, b);
    }

    /// PROPERTY: variants ignore carrier and storage, but not the camera.
    #[test]
    fn property_variant_compares_camera_and_minutes(
        variant in phone_variant(),
        carrier in carrier(),
        storage in 1i32..2_048,
    ) {
        let mins = variant.minutes_remaining();
        let camera = variant.has_high_res_camera();

        let same = PhoneDeviceVariant::new(mins, carrier.clone(), camera, storage);
        prop_assert_eq!(&variant, &same);
        prop_assert_ne!(&variant, &PhoneDeviceVariant::new(mins, carrier, !camera, storage));
    }

    /// PROPERTY: a variant never equals a phone, whatever they hold.
    #[test]
    fn property_variant_never_equals_phone(variant in phone_variant()) {
        let phone = variant.phone().clone();

        prop_assert!(!phone.equals(Some(variant.as_any())));
        prop_assert!(!variant.equals(Some(phone.as_any())));
        prop_assert_ne!(AnyDevice::from(phone), AnyDevice::from(variant));
    }
}
