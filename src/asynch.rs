//! Async flavour of the driver, same register sequences as [`crate::Mpu6500`].

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::register_map::{dlpf, full_scale, int_enable, pwr_mgmt_1, pwr_mgmt_2};
use crate::{
    AccelFullScaleRate, AccelLowPassFilter, Config, GyroFullScaleRate, GyroLowPassFilter,
    InterruptPinConfig, RawData, RegisterMap, I2C_ADDR_AD0_HIGH, I2C_ADDR_AD0_LOW,
    RESET_SETTLE_MS, WHO_AM_I,
};

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

    pub fn release(self) -> T {
        self.dev
    }
}

impl<T> Mpu6500<T>
where
    T: I2c,
{
    /// Check `WHO_AM_I` response
    pub async fn detected(&mut self) -> Result<bool, T::Error> {
        let value = self.read_who_am_i().await?;

        Ok(value == WHO_AM_I)
    }

    pub async fn read_who_am_i(&mut self) -> Result<u8, T::Error> {
        self.read_register(RegisterMap::WhoAmI).await
    }

    /// Initialize IMU with the default profile
    pub async fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), T::Error> {
        self.init_with_config(delay, Config::default()).await
    }

    /// See [`crate::Mpu6500::init_with_config`]
    pub async fn init_with_config(
        &mut self,
        delay: &mut impl DelayNs,
        config: Config,
    ) -> Result<(), T::Error> {
        self.reset(delay).await?;
        self.set_clock_source().await?;
        self.configure_accel(config.accel_full_scale, config.accel_filter)
            .await?;
        self.configure_gyro(config.gyro_full_scale, config.gyro_filter)
            .await?;
        self.enable_temperature_sensor().await?;
        self.configure_interrupt_pin(config.interrupt_pin).await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("MPU6500 initialized with {:?}", config);

        Ok(())
    }

    pub async fn read_register(&mut self, register: RegisterMap) -> Result<u8, T::Error> {
        let mut buf = [0; 1];

        self.read_registers(register, &mut buf).await?;

        Ok(buf[0])
    }

    pub async fn read_registers(
        &mut self,
        register: RegisterMap,
        buf: &mut [u8],
    ) -> Result<(), T::Error> {
        self.dev
            .write_read(self.address, &[register as u8], buf)
            .await
    }

    pub async fn write_register(
        &mut self,
        register: RegisterMap,
        value: u8,
    ) -> Result<(), T::Error> {
        self.dev.write(self.address, &[register as u8, value]).await
    }

    async fn modify_register(
        &mut self,
        register: RegisterMap,
        f: impl FnOnce(u8) -> u8,
    ) -> Result<(), T::Error> {
        let value = self.read_register(register).await?;

        self.write_register(register, f(value)).await
    }

    /// Reset routine
    pub async fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt1, pwr_mgmt_1::DEVICE_RESET)
            .await?;

        delay.delay_ms(RESET_SETTLE_MS).await;

        Ok(())
    }

    pub async fn set_clock_source(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt1, pwr_mgmt_1::CLKSEL_AUTO)
            .await
    }

    pub async fn configure_accel(
        &mut self,
        scale: AccelFullScaleRate,
        filter: AccelLowPassFilter,
    ) -> Result<(), T::Error> {
        self.write_register(RegisterMap::AccelConfig, scale.bits())
            .await?;
        self.write_register(RegisterMap::AccelConfig2, filter.bits())
            .await
    }

    pub async fn configure_gyro(
        &mut self,
        scale: GyroFullScaleRate,
        filter: GyroLowPassFilter,
    ) -> Result<(), T::Error> {
        self.write_register(RegisterMap::GyroConfig, scale.bits())
            .await?;
        self.write_register(RegisterMap::Config, filter.bits())
            .await
    }

    pub async fn set_gyro_full_scale(&mut self, scale: GyroFullScaleRate) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::GyroConfig, |value| {
            (value & !full_scale::MASK) | scale.bits()
        })
        .await
    }

    pub async fn set_accel_full_scale(
        &mut self,
        scale: AccelFullScaleRate,
    ) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::AccelConfig, |value| {
            (value & !full_scale::MASK) | scale.bits()
        })
        .await
    }

    pub async fn set_gyro_low_pass_filter(
        &mut self,
        filter: GyroLowPassFilter,
    ) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::Config, |value| {
            (value & !dlpf::MASK) | filter.bits()
        })
        .await
    }

    pub async fn set_accel_low_pass_filter(
        &mut self,
        filter: AccelLowPassFilter,
    ) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::AccelConfig2, |value| {
            (value & !dlpf::MASK) | filter.bits()
        })
        .await
    }

    pub async fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), T::Error> {
        self.write_register(RegisterMap::SmplRtDiv, divider).await
    }

    pub async fn enable_temperature_sensor(&mut self) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::PwrMgmt1, |value| value & !pwr_mgmt_1::TEMP_DIS)
            .await
    }

    pub async fn disable_temperature_sensor(&mut self) -> Result<(), T::Error> {
        self.modify_register(RegisterMap::PwrMgmt1, |value| value | pwr_mgmt_1::TEMP_DIS)
            .await
    }

    pub async fn disable_gyro(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt2, pwr_mgmt_2::DISABLE_GYRO)
            .await
    }

    pub async fn enable_gyro(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::PwrMgmt2, 0).await
    }

    pub async fn configure_interrupt_pin(
        &mut self,
        pin: InterruptPinConfig,
    ) -> Result<(), T::Error> {
        self.write_register(RegisterMap::IntPinCfg, pin.bits())
            .await
    }

    /// Drive interrupt pin when new measurement data is ready
    pub async fn enable_data_ready_interrupt(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::IntEnable, int_enable::RAW_RDY_EN)
            .await
    }

    pub async fn disable_data_ready_interrupt(&mut self) -> Result<(), T::Error> {
        self.write_register(RegisterMap::IntEnable, 0).await
    }

    pub async fn sleep(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("MPU6500 sleep");

        self.modify_register(RegisterMap::PwrMgmt1, |value| value | pwr_mgmt_1::SLEEP)
            .await
    }

    pub async fn wake_up(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("MPU6500 wake up");

        self.modify_register(RegisterMap::PwrMgmt1, |value| value & !pwr_mgmt_1::SLEEP)
            .await
    }

    /// Read raw accelerometer measurement data
    pub async fn read_accel_data(&mut self) -> Result<RawData, T::Error> {
        let mut data = [0; RawData::SIZE];

        self.read_registers(RegisterMap::AccelXOutH, &mut data)
            .await?;

        Ok(data.into())
    }

    /// Read raw gyroscope measurement data
    pub async fn read_gyro_data(&mut self) -> Result<RawData, T::Error> {
        let mut data = [0; RawData::SIZE];

        self.read_registers(RegisterMap::GyroXOutH, &mut data)
            .await?;

        Ok(data.into())
    }
}
