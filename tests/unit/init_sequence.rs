//! Initialization sequence ordering and abort behaviour

use crate::common::{create_driver, default_init_log, Access, BusError, INIT_TRANSACTIONS};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use mpu_6500::{
    AccelFullScaleRate, AccelLowPassFilter, Config, GyroFullScaleRate, GyroLowPassFilter,
    InterruptClear, InterruptLatch, InterruptLevel, InterruptPinConfig, Mpu6500, PinDrive,
    RegisterMap,
};

const ADDR: u8 = 0x68;

#[test]
fn init_issues_exact_transactions() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![0x6B, 0x80]),
        I2cTransaction::write(ADDR, vec![0x6B, 0x01]),
        I2cTransaction::write(ADDR, vec![0x1C, 0x18]),
        I2cTransaction::write(ADDR, vec![0x1D, 0x04]),
        I2cTransaction::write(ADDR, vec![0x1B, 0x18]),
        I2cTransaction::write(ADDR, vec![0x1A, 0x04]),
        I2cTransaction::write_read(ADDR, vec![0x6B], vec![0x09]),
        I2cTransaction::write(ADDR, vec![0x6B, 0x01]),
        I2cTransaction::write(ADDR, vec![0x37, 0xB0]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut dev = Mpu6500::new(i2c.clone());

    dev.init(&mut NoopDelay::new()).unwrap();

    i2c.done();
}

#[test]
fn init_waits_between_reset_and_clock_select() {
    let (mut dev, bus) = create_driver();

    dev.init(&mut bus.delay()).unwrap();

    assert_eq!(bus.log(), default_init_log());
}

#[test]
fn init_leaves_device_awake_and_configured() {
    let (mut dev, bus) = create_driver();

    bus.set(RegisterMap::IntEnable, 0x01);
    dev.init(&mut bus.delay()).unwrap();

    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0x01);
    assert_eq!(bus.get(RegisterMap::AccelConfig), 0x18);
    assert_eq!(bus.get(RegisterMap::AccelConfig2), 0x04);
    assert_eq!(bus.get(RegisterMap::GyroConfig), 0x18);
    assert_eq!(bus.get(RegisterMap::Config), 0x04);
    assert_eq!(bus.get(RegisterMap::IntPinCfg), 0xB0);
    assert_eq!(bus.get(RegisterMap::IntEnable), 0x00);
}

#[test]
fn init_aborts_on_first_failure_at_every_step() {
    for failing in 0..INIT_TRANSACTIONS {
        let (mut dev, bus) = create_driver();

        bus.fail_at(failing, BusError::Timeout);

        let result = dev.init(&mut bus.delay());

        assert_eq!(result, Err(BusError::Timeout), "step {}", failing);
        assert_eq!(bus.attempts(), failing + 1, "step {}", failing);
    }
}

#[test]
fn failed_reset_skips_settle_delay() {
    let (mut dev, bus) = create_driver();

    bus.fail_at(0, BusError::Nack);

    assert_eq!(dev.init(&mut bus.delay()), Err(BusError::Nack));
    assert!(bus.log().is_empty());
}

#[test]
fn init_failure_leaves_earlier_steps_applied() {
    let (mut dev, bus) = create_driver();

    // gyro range write
    bus.fail_at(4, BusError::ArbitrationLoss);

    assert_eq!(dev.init(&mut bus.delay()), Err(BusError::ArbitrationLoss));
    assert_eq!(bus.get(RegisterMap::AccelConfig), 0x18);
    assert_eq!(bus.get(RegisterMap::AccelConfig2), 0x04);
    assert_eq!(bus.get(RegisterMap::GyroConfig), 0x00);
    assert_eq!(bus.get(RegisterMap::IntPinCfg), 0x00);
}

#[test]
fn init_stops_at_mock_failure() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![0x6B, 0x80]),
        I2cTransaction::write(ADDR, vec![0x6B, 0x01]).with_error(ErrorKind::Other),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut dev = Mpu6500::new(i2c.clone());

    assert_eq!(dev.init(&mut NoopDelay::new()), Err(ErrorKind::Other));

    i2c.done();
}

#[test]
fn init_with_config_writes_selected_options() {
    let (mut dev, bus) = create_driver();
    let config = Config::default()
        .with_accel(AccelFullScaleRate::G4, AccelLowPassFilter::Hz99)
        .with_gyro(GyroFullScaleRate::Dps500, GyroLowPassFilter::Hz184)
        .with_interrupt_pin(InterruptPinConfig {
            level: InterruptLevel::ActiveHigh,
            drive: PinDrive::OpenDrain,
            latch: InterruptLatch::Pulse,
            clear: InterruptClear::OnStatusRead,
        });

    dev.init_with_config(&mut bus.delay(), config).unwrap();

    assert_eq!(
        bus.writes(),
        vec![
            (0x6B, 0x80),
            (0x6B, 0x01),
            (0x1C, 0x08),
            (0x1D, 0x02),
            (0x1B, 0x08),
            (0x1A, 0x01),
            (0x6B, 0x01),
            (0x37, 0x40),
        ]
    );
}

#[test]
fn init_recovers_device_left_asleep_with_temperature_disabled() {
    let (mut dev, bus) = create_driver();

    bus.set(RegisterMap::PwrMgmt1, 0x48);
    dev.init(&mut bus.delay()).unwrap();

    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0x01);
    assert!(bus.log().contains(&Access::Delay { ns: 100_000_000 }));
}

#[test]
fn temperature_enable_preserves_other_bits() {
    let (mut dev, bus) = create_driver();

    bus.set(RegisterMap::PwrMgmt1, 0b0111_1001);
    dev.enable_temperature_sensor().unwrap();

    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0b0111_0001);

    dev.disable_temperature_sensor().unwrap();

    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0b0111_1001);
}
