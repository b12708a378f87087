//! Sleep, wake up and sensor standby

use crate::common::{create_driver, Access, BusError};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use mpu_6500::{Mpu6500, RegisterMap};

#[test]
fn sleep_then_wake_up_preserves_other_bits() {
    let (mut dev, bus) = create_driver();

    // TEMP_DIS | GYRO_STANDBY | CLKSEL=1
    bus.set(RegisterMap::PwrMgmt1, 0b0001_1001);

    dev.sleep().unwrap();
    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0b0101_1001);

    dev.wake_up().unwrap();
    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0b0001_1001);
}

#[test]
fn sleep_and_wake_up_are_idempotent() {
    let (mut dev, bus) = create_driver();

    bus.set(RegisterMap::PwrMgmt1, 0x01);

    dev.sleep().unwrap();
    dev.sleep().unwrap();
    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0x41);

    dev.wake_up().unwrap();
    dev.wake_up().unwrap();
    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0x01);
}

#[test]
fn wake_up_after_init_and_sleep() {
    let (mut dev, bus) = create_driver();

    dev.init(&mut bus.delay()).unwrap();
    let configured = bus.get(RegisterMap::PwrMgmt1);
    bus.clear_log();

    dev.sleep().unwrap();
    dev.wake_up().unwrap();

    assert_eq!(bus.get(RegisterMap::PwrMgmt1), configured);
    assert_eq!(bus.attempts(), 4);
    assert_eq!(bus.get(RegisterMap::PwrMgmt1) & 0x40, 0);
}

#[test]
fn sleep_reads_before_writing() {
    let expectations = [
        I2cTransaction::write_read(0x68, vec![0x6B], vec![0x01]),
        I2cTransaction::write(0x68, vec![0x6B, 0x41]),
        I2cTransaction::write_read(0x68, vec![0x6B], vec![0x41]),
        I2cTransaction::write(0x68, vec![0x6B, 0x01]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut dev = Mpu6500::new(i2c.clone());

    dev.sleep().unwrap();
    dev.wake_up().unwrap();

    i2c.done();
}

#[test]
fn failed_read_skips_write_back() {
    let (mut dev, bus) = create_driver();

    bus.set(RegisterMap::PwrMgmt1, 0x01);
    bus.fail_next(BusError::Timeout);

    assert_eq!(dev.sleep(), Err(BusError::Timeout));
    assert_eq!(bus.attempts(), 1);
    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0x01);
}

#[test]
fn failed_write_back_is_reported() {
    let (mut dev, bus) = create_driver();

    bus.set(RegisterMap::PwrMgmt1, 0x41);
    bus.fail_at(1, BusError::Nack);

    assert_eq!(dev.wake_up(), Err(BusError::Nack));
    assert_eq!(bus.log(), vec![Access::Read { register: 0x6B, len: 1 }]);
    assert_eq!(bus.get(RegisterMap::PwrMgmt1), 0x41);
}

#[test]
fn gyro_standby() {
    let (mut dev, bus) = create_driver();

    dev.disable_gyro().unwrap();
    assert_eq!(bus.get(RegisterMap::PwrMgmt2), 0x07);

    dev.enable_gyro().unwrap();
    assert_eq!(bus.get(RegisterMap::PwrMgmt2), 0x00);
}
