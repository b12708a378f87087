/// MPU-6500 register offsets.
///
/// Offsets follow the manufacturer's register map (0x00 - 0x7E). Registers
/// used by the I2C master and external sensor passthrough are listed for
/// completeness only; the driver never touches them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegisterMap {
    SelfTestXGyro = 0x00,
    SelfTestYGyro = 0x01,
    SelfTestZGyro = 0x02,
    SelfTestXAccel = 0x0D,
    SelfTestYAccel = 0x0E,
    SelfTestZAccel = 0x0F,
    XgOffsetH = 0x13,
    XgOffsetL = 0x14,
    YgOffsetH = 0x15,
    YgOffsetL = 0x16,
    ZgOffsetH = 0x17,
    ZgOffsetL = 0x18,
    SmplRtDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    AccelConfig2 = 0x1D,
    LpAccelOdr = 0x1E,
    WomThr = 0x1F,
    FifoEn = 0x23,
    I2CMstCtrl = 0x24,
    I2CSlv0Addr = 0x25,
    I2CSlv0Reg = 0x26,
    I2CSlv0Ctrl = 0x27,
    I2CSlv1Addr = 0x28,
    I2CSlv1Reg = 0x29,
    I2CSlv1Ctrl = 0x2A,
    I2CSlv2Addr = 0x2B,
    I2CSlv2Reg = 0x2C,
    I2CSlv2Ctrl = 0x2D,
    I2CSlv3Addr = 0x2E,
    I2CSlv3Reg = 0x2F,
    I2CSlv3Ctrl = 0x30,
    I2CSlv4Addr = 0x31,
    I2CSlv4Reg = 0x32,
    I2CSlv4Do = 0x33,
    I2CSlv4Ctrl = 0x34,
    I2CSlv4Di = 0x35,
    I2CMstStatus = 0x36,
    IntPinCfg = 0x37,
    IntEnable = 0x38,
    IntStatus = 0x3A,
    AccelXOutH = 0x3B,
    AccelXOutL = 0x3C,
    AccelYOutH = 0x3D,
    AccelYOutL = 0x3E,
    AccelZOutH = 0x3F,
    AccelZOutL = 0x40,
    TempOutH = 0x41,
    TempOutL = 0x42,
    GyroXOutH = 0x43,
    GyroXOutL = 0x44,
    GyroYOutH = 0x45,
    GyroYOutL = 0x46,
    GyroZOutH = 0x47,
    GyroZOutL = 0x48,
    ExtSensData00 = 0x49,
    ExtSensData01 = 0x4A,
    ExtSensData02 = 0x4B,
    ExtSensData03 = 0x4C,
    ExtSensData04 = 0x4D,
    ExtSensData05 = 0x4E,
    ExtSensData06 = 0x4F,
    ExtSensData07 = 0x50,
    ExtSensData08 = 0x51,
    ExtSensData09 = 0x52,
    ExtSensData10 = 0x53,
    ExtSensData11 = 0x54,
    ExtSensData12 = 0x55,
    ExtSensData13 = 0x56,
    ExtSensData14 = 0x57,
    ExtSensData15 = 0x58,
    ExtSensData16 = 0x59,
    ExtSensData17 = 0x5A,
    ExtSensData18 = 0x5B,
    ExtSensData19 = 0x5C,
    ExtSensData20 = 0x5D,
    ExtSensData21 = 0x5E,
    ExtSensData22 = 0x5F,
    ExtSensData23 = 0x60,
    I2CSlv0Do = 0x63,
    I2CSlv1Do = 0x64,
    I2CSlv2Do = 0x65,
    I2CSlv3Do = 0x66,
    I2CMstDelayCtrl = 0x67,
    SignalPathReset = 0x68,
    AccelIntelCtrl = 0x69,
    UserCtrl = 0x6A,
    PwrMgmt1 = 0x6B,
    PwrMgmt2 = 0x6C,
    FifoCountH = 0x72,
    FifoCountL = 0x73,
    FifoRW = 0x74,
    WhoAmI = 0x75,
    XaOffsetH = 0x77,
    XaOffsetL = 0x78,
    YaOffsetH = 0x7A,
    YaOffsetL = 0x7B,
    ZaOffsetH = 0x7D,
    ZaOffsetL = 0x7E,
}

/// `PWR_MGMT_1` bit fields.
pub mod pwr_mgmt_1 {
    /// Reset all internal registers to their power-on values, self-clearing
    pub const DEVICE_RESET: u8 = 1 << 7;
    pub const SLEEP: u8 = 1 << 6;
    pub const CYCLE: u8 = 1 << 5;
    pub const GYRO_STANDBY: u8 = 1 << 4;
    pub const TEMP_DIS: u8 = 1 << 3;
    pub const CLKSEL_MASK: u8 = 0b111;
    /// Auto select best available clock: PLL if ready, else internal oscillator
    pub const CLKSEL_AUTO: u8 = 0b001;
}

/// `PWR_MGMT_2` bit fields.
pub mod pwr_mgmt_2 {
    pub const DISABLE_XA: u8 = 1 << 5;
    pub const DISABLE_YA: u8 = 1 << 4;
    pub const DISABLE_ZA: u8 = 1 << 3;
    pub const DISABLE_XG: u8 = 1 << 2;
    pub const DISABLE_YG: u8 = 1 << 1;
    pub const DISABLE_ZG: u8 = 1 << 0;
    pub const DISABLE_GYRO: u8 = DISABLE_XG | DISABLE_YG | DISABLE_ZG;
}

/// `GYRO_CONFIG` and `ACCEL_CONFIG` share the full scale select layout.
pub mod full_scale {
    pub const SHIFT: u8 = 3;
    pub const MASK: u8 = 0b11 << SHIFT;
}

/// `CONFIG` and `ACCEL_CONFIG_2` share the low-pass filter select layout.
pub mod dlpf {
    pub const MASK: u8 = 0b111;
}

/// `INT_PIN_CFG` bit fields.
pub mod int_pin_cfg {
    /// Logic level for INT pin is active low
    pub const ACTL: u8 = 1 << 7;
    /// INT pin is configured as open drain
    pub const OPEN: u8 = 1 << 6;
    /// INT pin level held until interrupt status is cleared
    pub const LATCH_INT_EN: u8 = 1 << 5;
    /// Interrupt status is cleared by any read operation
    pub const INT_ANYRD_2CLEAR: u8 = 1 << 4;
}

/// `INT_ENABLE` bit fields.
pub mod int_enable {
    pub const WOM_EN: u8 = 1 << 6;
    pub const FIFO_OFLOW_EN: u8 = 1 << 4;
    pub const FSYNC_INT_EN: u8 = 1 << 3;
    pub const RAW_RDY_EN: u8 = 1 << 0;
}
