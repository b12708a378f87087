use crate::register_map::{dlpf, full_scale, int_pin_cfg};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScaleRate {
    Dps250 = 0b00,
    Dps500 = 0b01,
    Dps1000 = 0b10,
    Dps2000 = 0b11,
}

impl GyroFullScaleRate {
    /// `GYRO_CONFIG` bits selecting this range
    pub const fn bits(self) -> u8 {
        (self as u8) << full_scale::SHIFT
    }

    pub const fn from_bits(value: u8) -> Self {
        match (value & full_scale::MASK) >> full_scale::SHIFT {
            0b00 => Self::Dps250,
            0b01 => Self::Dps500,
            0b10 => Self::Dps1000,
            _ => Self::Dps2000,
        }
    }

    /// Sensitivity in LSB per °/s. Raw angular rate divided by this gives °/s.
    pub fn sensitivity(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScaleRate {
    G2 = 0b00,
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

impl AccelFullScaleRate {
    /// `ACCEL_CONFIG` bits selecting this range
    pub const fn bits(self) -> u8 {
        (self as u8) << full_scale::SHIFT
    }

    pub const fn from_bits(value: u8) -> Self {
        match (value & full_scale::MASK) >> full_scale::SHIFT {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Sensitivity in LSB per g. Raw acceleration divided by this gives g.
    pub fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }
}

/// Gyroscope and temperature digital low-pass filter (`CONFIG.DLPF_CFG`).
///
/// Variants are named after the gyroscope 3 dB bandwidth, valid while
/// `GYRO_CONFIG.FCHOICE_B` is zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroLowPassFilter {
    Hz250 = 0,
    Hz184 = 1,
    Hz92 = 2,
    Hz41 = 3,
    Hz20 = 4,
    Hz10 = 5,
    Hz5 = 6,
    Hz3600 = 7,
}

impl GyroLowPassFilter {
    pub const fn bits(self) -> u8 {
        self as u8 & dlpf::MASK
    }
}

/// Accelerometer digital low-pass filter (`ACCEL_CONFIG_2.A_DLPF_CFG`).
///
/// Variants are named after the 3 dB bandwidth, rounded down. Setting 0
/// duplicates setting 1 and has no variant of its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelLowPassFilter {
    Hz218 = 1,
    Hz99 = 2,
    Hz44 = 3,
    Hz21 = 4,
    Hz10 = 5,
    Hz5 = 6,
    Hz420 = 7,
}

impl AccelLowPassFilter {
    pub const fn bits(self) -> u8 {
        self as u8 & dlpf::MASK
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLevel {
    ActiveHigh,
    ActiveLow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDrive {
    PushPull,
    OpenDrain,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLatch {
    /// 50 us pulse per interrupt
    Pulse,
    /// Held until the interrupt status is cleared
    Latched,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptClear {
    /// Only reading `INT_STATUS` clears the interrupt
    OnStatusRead,
    /// Any register read clears the interrupt
    OnAnyRead,
}

/// INT pin electrical behaviour, written to `INT_PIN_CFG`.
///
/// Default: active low, push-pull, latched, cleared on any read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptPinConfig {
    pub level: InterruptLevel,
    pub drive: PinDrive,
    pub latch: InterruptLatch,
    pub clear: InterruptClear,
}

impl InterruptPinConfig {
    pub const fn bits(&self) -> u8 {
        let mut value = 0;

        if let InterruptLevel::ActiveLow = self.level {
            value |= int_pin_cfg::ACTL;
        }

        if let PinDrive::OpenDrain = self.drive {
            value |= int_pin_cfg::OPEN;
        }

        if let InterruptLatch::Latched = self.latch {
            value |= int_pin_cfg::LATCH_INT_EN;
        }

        if let InterruptClear::OnAnyRead = self.clear {
            value |= int_pin_cfg::INT_ANYRD_2CLEAR;
        }

        value
    }
}

impl Default for InterruptPinConfig {
    fn default() -> Self {
        Self {
            level: InterruptLevel::ActiveLow,
            drive: PinDrive::PushPull,
            latch: InterruptLatch::Latched,
            clear: InterruptClear::OnAnyRead,
        }
    }
}

/// Settings applied by [`Mpu6500::init_with_config`](crate::Mpu6500::init_with_config).
///
/// `Config::default()` is the widest range on both sensors with a 20 Hz
/// low-pass filter, which is what [`Mpu6500::init`](crate::Mpu6500::init)
/// applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub accel_full_scale: AccelFullScaleRate,
    pub accel_filter: AccelLowPassFilter,
    pub gyro_full_scale: GyroFullScaleRate,
    pub gyro_filter: GyroLowPassFilter,
    pub interrupt_pin: InterruptPinConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accel_full_scale: AccelFullScaleRate::G16,
            accel_filter: AccelLowPassFilter::Hz21,
            gyro_full_scale: GyroFullScaleRate::Dps2000,
            gyro_filter: GyroLowPassFilter::Hz20,
            interrupt_pin: InterruptPinConfig::default(),
        }
    }
}

impl Config {
    pub fn with_accel(mut self, scale: AccelFullScaleRate, filter: AccelLowPassFilter) -> Self {
        self.accel_full_scale = scale;
        self.accel_filter = filter;
        self
    }

    pub fn with_gyro(mut self, scale: GyroFullScaleRate, filter: GyroLowPassFilter) -> Self {
        self.gyro_full_scale = scale;
        self.gyro_filter = filter;
        self
    }

    pub fn with_interrupt_pin(mut self, interrupt_pin: InterruptPinConfig) -> Self {
        self.interrupt_pin = interrupt_pin;
        self
    }
}
