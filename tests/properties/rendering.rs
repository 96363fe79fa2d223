//! Property tests for the detail rendering layout.

use proptest::prelude::*;

use device_model::{Device, DeviceType};

use crate::strategies::{any_device, phone_variant};

fn expected_line_count(device_type: DeviceType) -> usize {
    match device_type {
        DeviceType::MusicPlayer | DeviceType::TabletLearningDevice | DeviceType::PhoneDevice => 3,
        DeviceType::PhoneDeviceVariant => 5,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: details start with the purpose line and end with a newline.
    #[test]
    fn property_details_layout(device in any_device()) {
        let details = device.details();
        let purpose_line = format!("The purpose of this IDevice is {}.\n", device.purpose());

        prop_assert!(details.starts_with(&purpose_line));
        prop_assert!(details.ends_with(".\n"));
        prop_assert_eq!(details.lines().count(), expected_line_count(device.device_type()));
        prop_assert_eq!(device.to_string(), details);
    }

    /// PROPERTY: a variant renders its phone first, then its own two lines.
    #[test]
    fn property_variant_extends_phone_rendering(variant in phone_variant()) {
        let details = variant.details();
        let phone_details = variant.phone().details();

        prop_assert!(details.starts_with(&phone_details));

        let extra: Vec<&str> = details[phone_details.len()..].lines().collect();
        let camera = variant.has_high_res_camera();
        prop_assert_eq!(
            extra,
            vec![
                format!("This device has a high resolution camera: {}.", camera),
                format!("This device has {} GB of memory.", variant.storage_gb()),
            ]
        );
    }
}
