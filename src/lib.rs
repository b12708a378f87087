//! Driver for the TDK InvenSense MPU-6500 accelerometer and gyroscope over I2C.
//!
//! [`Mpu6500`] is the blocking driver built on `embedded-hal` 1.0. With the
//! `async` feature the same API is available as [`asynch::Mpu6500`] on top of
//! `embedded-hal-async`.
//!
//! Every call is a short, fixed sequence of register transactions. Errors
//! from the bus are returned as-is and nothing is retried; a failed
//! [`Mpu6500::init`] may leave the device partially configured, so run it
//! again from the start.
//!
//! The driver keeps no state besides the bus handle. Read-modify-write calls
//! ([`Mpu6500::sleep`], [`Mpu6500::wake_up`], temperature sensor enable) are not
//! atomic on the device; when several contexts share one sensor, serialize
//! access to the bus around every call.
//!
//! ```ignore
//! let mut imu = Mpu6500::new(i2c);
//!
//! imu.init(&mut delay)?;
//!
//! let accel = imu.read_accel_data()?;
//! let g = accel.x() as f32 / AccelFullScaleRate::G16.sensitivity();
//! ```

#![no_std]

#[cfg(feature = "async")]
pub mod asynch;
pub mod config;
pub mod raw_data;
pub mod register_map;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use config::{
    AccelFullScaleRate, AccelLowPassFilter, Config, GyroFullScaleRate, GyroLowPassFilter,
    InterruptClear, InterruptLatch, InterruptLevel, InterruptPinConfig, PinDrive,
};
pub use raw_data::RawData;
pub use register_map::RegisterMap;

use register_map::{dlpf, full_scale, int_enable, pwr_mgmt_1, pwr_mgmt_2};

pub const I2C_ADDR_AD0_LOW: SevenBitAddress = 0b1101000;
pub const I2C_ADDR_AD0_HIGH: SevenBitAddress = 0b1101001;

/// Expected `WHO_AM_I` response
pub const WHO_AM_I: u8 = 0x70;

/// Time the device needs after a reset before it accepts register writes
pub const RESET_SETTLE_MS: u32 = 100;

pub struct Mpu6500<T> {
    dev: T,
    address: SevenBitAddress,
}

impl<T> Mpu6500<T> {
    /// Use driver with default I2C address (AD0 line low)
    pub fn new(dev: T) -> Self {
        Self {
            dev,
            address: I2C_ADDR_AD0_LOW,
        }
    }

    /// AD0 line is high, adjust device I2C address accordingly
    pub fn with_ad0_line_high(self) -> Self {
        Self {
            dev: self.dev,
            address: I2C_ADDR_AD0_HIGH,
        }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give back the bus handle
    pub fn release(self) -> T {
        self.dev
    }
}

impl<T> Mpu6500<T>
where
    T: I2c,
{
    /// Check `WHO_AM_I` response
    pub fn detected(&mut self) -> Result<bool, T::Error> {
        let value = self.read_who_am_i()?;

        Ok(value == WHO_AM_I)
    }

    /// Raw `WHO_AM_I` value, compare against [`WHO_AM_I`] to verify the device
    pub fn read_who_am_i(&mut self) -> Result<u8, T::Error> {
        self.read_register(RegisterMap::WhoAmI)
    }

    /// Initialize IMU with the default profile, see [`Config::default`]
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), T::Error> {
        self.init_with_config(delay, Config::default())
    }

    /// Bring the device from any state to a known, running configuration.
    ///
    /// Steps, in order: reset, clock select (leaves sleep), accelerometer range
    /// and filter, gyroscope range and filter, temperature sensor enable,
    /// interrupt pin setup. The first failing step aborts the sequence.
    /// Interrupts stay disabled.
    pub fn init_with_config(
        &mut self,
        delay: &mut impl DelayNs,
        config: Config,
    ) -> Result<(), T::Error> {
        self.reset(delay)?;
        self.set_clock_source()?;
        self.configure_accel(config.accel_full_scale, config.accel_filter)?;
        self.configure_gyro(config.gyro_full_scale, config.gyro_filter)?;
        self.enable_temperature_sensor()?;
        self.configure_interrupt_pin(config.interrupt_pin)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("MPU6500 initialized with {:?}", config);

        Ok(())
    }

    pub fn read_register(&mut self, register: RegisterMap) -> Result<u8, T::Error> {
        let mut buf = [0; 1];

        self.read_registers(register, &mut buf)?;

        Ok(buf[0])
    }

    /// Burst read starting at `register`, the device auto-increments the offset.
    pub fn read_registers(
        &mut self,
        register: RegisterMap,
        buf: &mut [u8],
    ) -> Result<(), T::Error> {
        self.dev.write_read(self.address, &[register as u8], buf)
    }

    pub fn write_register(&mut self, register: RegisterMap, value: u8) -> Result<(), T::Error> {
        self.dev.write(self.address, &[register as u8, value])
    }

    fn modify_register(
        &mut self,
        register: RegisterMap,
        f: impl FnOnce(u8) -> u8,
    ) -> Result<(), T::Error> {
        let value = self.read_register(register)?;

        self.write_register(register, f(value))
    }

    /// Reset routine, blocks for [`RESET_SETTLE_MS`] afterwards
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt1, pwr_mgmt_1::DEVICE_RESET)?;

        delay.delay_ms(RESET_SETTLE_MS);

        Ok(())
    }

    /// Auto select best clock source - tries PLL, then internal oscillator.
    /// Overwrites the whole register, which also clears sleep.
    pub fn set_clock_source(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt1, pwr_mgmt_1::CLKSEL_AUTO)
    }

    /// Write range and low-pass filter registers of the accelerometer
    pub fn configure_accel(
        &mut self,
        scale: AccelFullScaleRate,
        filter: AccelLowPassFilter,
    ) -> Result<(), T::Error> {
        self.write_register(RegisterMap::AccelConfig, scale.bits())?;
        self.write_register(RegisterMap::AccelConfig2, filter.bits())
    }

    /// Write range and low-pass filter registers of the gyroscope
    pub fn configure_gyro(
        &mut self,
        scale: GyroFullScaleRate,
        filter: GyroLowPassFilter,
    ) -> Result<(), T::Error> {
        self.write_register(RegisterMap::GyroConfig, scale.bits())?;
        self.write_register(RegisterMap::Config, filter.bits())
    }

    pub fn set_gyro_full_scale(&mut self, scale: GyroFullScaleRate) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::GyroConfig, |value| {
            (value & !full_scale::MASK) | scale.bits()
        })
    }

    pub fn set_accel_full_scale(&mut self, scale: AccelFullScaleRate) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::AccelConfig, |value| {
            (value & !full_scale::MASK) | scale.bits()
        })
    }

    pub fn set_gyro_low_pass_filter(&mut self, filter: GyroLowPassFilter) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::Config, |value| {
            (value & !dlpf::MASK) | filter.bits()
        })
    }

    pub fn set_accel_low_pass_filter(
        &mut self,
        filter: AccelLowPassFilter,
    ) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::AccelConfig2, |value| {
            (value & !dlpf::MASK) | filter.bits()
        })
    }

    /// Divider is working only when `Fs = 1kHz`, so to set desired sampling rate:
    ///
    /// `divider = 1000 / SAMPLE_RATE_HZ - 1`
    ///
    /// Sampling rate must be between 4Hz and 1kHz.
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), T::Error> {
        self.write_register(RegisterMap::SmplRtDiv, divider)
    }

    pub fn enable_temperature_sensor(&mut self) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::PwrMgmt1, |value| value & !pwr_mgmt_1::TEMP_DIS)
    }

    pub fn disable_temperature_sensor(&mut self) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::PwrMgmt1, |value| value | pwr_mgmt_1::TEMP_DIS)
    }

    /// Put all three gyroscope axes in standby, accelerometer keeps running
    pub fn disable_gyro(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt2, pwr_mgmt_2::DISABLE_GYRO)
    }

    /// Enable all accelerometer and gyroscope axes
    pub fn enable_gyro(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt2, 0)
    }

    pub fn configure_interrupt_pin(&mut self, pin: InterruptPinConfig) -> Result<(), T::Error> {
        self.write_register(RegisterMap::IntPinCfg, pin.bits())
    }

    /// Drive interrupt pin when new measurement data is ready.
    /// Every other interrupt source is disabled.
    pub fn enable_data_ready_interrupt(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::IntEnable, int_enable::RAW_RDY_EN)
    }

    /// Disables every interrupt source, not only data ready
    pub fn disable_data_ready_interrupt(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::IntEnable, 0)
    }

    /// Enter low power sleep, register contents are kept
    pub fn sleep(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("MPU6500 sleep");

        self.modify_register(RegisterMap::PwrMgmt1, |value| value | pwr_mgmt_1::SLEEP)
    }

    pub fn wake_up(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("MPU6500 wake up");

        self.modify_register(RegisterMap::PwrMgmt1, |value| value & !pwr_mgmt_1::SLEEP)
    }

    /// Read raw accelerometer measurement data
    pub fn read_accel_data(&mut self) -> Result<RawData, T::Error> {
        let mut data = [0; RawData::SIZE];

        self.read_registers(RegisterMap::AccelXOutH, &mut data)?;

        Ok(data.into())
    }

    /// Read raw gyroscope measurement data
    pub fn read_gyro_data(&mut self) -> Result<RawData, T::Error> {
        let mut data = [0; RawData::SIZE];

        self.read_registers(RegisterMap::GyroXOutH, &mut data)?;

        Ok(data.into())
    }
}
