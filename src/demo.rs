// 🧪 Equality Demonstration
// Pairs of devices with a known expected outcome, checked through the
// polymorphic `Device::equals` contract.

use crate::devices::{
    Device, DeviceType, MusicPlayer, PhoneDevice, PhoneDeviceVariant, TabletLearningDevice,
};
use std::fmt;

// ============================================================================
// EQUALITY CHECK
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityCheck {
    /// Kind of both compared devices
    pub device_type: DeviceType,

    /// Name of the left-hand device (e.g. "player1")
    pub left: String,

    /// Name of the right-hand device
    pub right: String,

    /// Whether the devices are supposed to be equal
    pub expected: bool,

    /// What `equals` actually returned
    pub actual: bool,
}

impl EqualityCheck {
    fn run(
        device_type: DeviceType,
        left: (&str, &dyn Device),
        right: (&str, &dyn Device),
        expected: bool,
    ) -> Self {
        EqualityCheck {
            device_type,
            left: left.0.to_string(),
            right: right.0.to_string(),
            expected,
            actual: left.1.equals(Some(right.1.as_any())),
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for EqualityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = (&self.left, &self.right);
        match (self.passed(), self.expected) {
            (true, true) => write!(f, "CORRECT: {} is equal to {}", left, right),
            (true, false) => write!(f, "CORRECT: {} is not equal to {}", left, right),
            (false, true) => write!(f, "INCORRECT: {} should be equal to {}", left, right),
            (false, false) => write!(f, "INCORRECT: {} should not be equal to {}", left, right),
        }
    }
}

// ============================================================================
// EQUALITY REPORT
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EqualityReport {
    pub checks: Vec<EqualityCheck>,
}

impl EqualityReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(EqualityCheck::passed)
    }

    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|check| !check.passed()).count()
    }

    /// Checks of one device kind, in the order they ran
    pub fn for_type(&self, device_type: DeviceType) -> impl Iterator<Item = &EqualityCheck> {
        self.checks
            .iter()
            .filter(move |check| check.device_type == device_type)
    }
}

impl fmt::Display for EqualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for device_type in DeviceType::all() {
            let mut checks = self.for_type(device_type).peekable();
            if checks.peek().is_none() {
                continue;
            }

            writeln!(f, "{} Equality Test:", device_type)?;
            for check in checks {
                writeln!(f, "{}", check)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Run the two checks per device kind from the demonstration program
pub fn run_equality_demo() -> EqualityReport {
    let mut checks = Vec::new();

    let player1 = MusicPlayer::new(300, 80.0);
    let player2 = MusicPlayer::new(400, 85.0);
    let player3 = MusicPlayer::new(300, 70.0);
    checks.push(EqualityCheck::run(
        DeviceType::MusicPlayer,
        ("player1", &player1),
        ("player2", &player2),
        false,
    ));
    checks.push(EqualityCheck::run(
        DeviceType::MusicPlayer,
        ("player1", &player1),
        ("player3", &player3),
        true,
    ));

    let tablet1 = TabletLearningDevice::new(true, "iPadOS 15");
    let tablet2 = TabletLearningDevice::new(false, "iPadOS 14");
    let tablet3 = TabletLearningDevice::new(true, "iPadOS 15");
    checks.push(EqualityCheck::run(
        DeviceType::TabletLearningDevice,
        ("tablet1", &tablet1),
        ("tablet2", &tablet2),
        false,
    ));
    checks.push(EqualityCheck::run(
        DeviceType::TabletLearningDevice,
        ("tablet1", &tablet1),
        ("tablet3", &tablet3),
        true,
    ));

    let phone1 = PhoneDevice::new(120.0, "Verizon");
    let phone2 = PhoneDevice::new(180.0, "T-Mobile");
    let phone3 = PhoneDevice::new(120.0, "AT&T");
    checks.push(EqualityCheck::run(
        DeviceType::PhoneDevice,
        ("phone1", &phone1),
        ("phone2", &phone2),
        false,
    ));
    checks.push(EqualityCheck::run(
        DeviceType::PhoneDevice,
        ("phone1", &phone1),
        ("phone3", &phone3),
        true,
    ));

    let variant1 = PhoneDeviceVariant::new(100.0, "Verizon", true, 512);
    let variant2 = PhoneDeviceVariant::new(100.0, "Verizon", true, 256);
    let variant3 = PhoneDeviceVariant::new(100.0, "Verizon", false, 512);
    checks.push(EqualityCheck::run(
        DeviceType::PhoneDeviceVariant,
        ("variant1", &variant1),
        ("variant2", &variant2),
        true,
    ));
    checks.push(EqualityCheck::run(
        DeviceType::PhoneDeviceVariant,
        ("variant1", &variant1),
        ("variant3", &variant3),
        false,
    ));

    EqualityReport { checks }
}
