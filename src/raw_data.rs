/// One raw three-axis sample, in sensor counts.
///
/// Counts are not scaled; divide by the sensitivity of the configured full
/// scale range to get physical units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawData {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl RawData {
    /// Output register span for one sensor: X, Y, Z, high byte first
    pub const SIZE: usize = 6;

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn as_tuple(&self) -> (i16, i16, i16) {
        (self.x, self.y, self.z)
    }
}

impl From<[u8; Self::SIZE]> for RawData {
    fn from(value: [u8; Self::SIZE]) -> Self {
        Self {
            x: i16::from_be_bytes([value[0], value[1]]),
            y: i16::from_be_bytes([value[2], value[3]]),
            z: i16::from_be_bytes([value[4], value[5]]),
        }
    }
}

impl From<RawData> for [i16; 3] {
    fn from(value: RawData) -> Self {
        [value.x, value.y, value.z]
    }
}
