//! Raw burst-read frame
//!
//! Layout of the 14 bytes starting at `ACCEL_XOUT_H` (high byte first):
//!
//! ```text
//! offset  0..6   ACCEL_X, ACCEL_Y, ACCEL_Z
//! offset  6..8   TEMP
//! offset  8..14  GYRO_X, GYRO_Y, GYRO_Z
//! ```

/// Number of bytes in one accel + temperature + gyro burst read.
pub const FRAME_LEN: usize = 14;

const ACCEL_OFFSET: usize = 0;
const TEMP_OFFSET: usize = 6;
const GYRO_OFFSET: usize = 8;

/// Decode one big-endian register word as a two's-complement value.
///
/// `value = high << 8 | low`; values at or above 32768 wrap to
/// `value - 65536`.
pub const fn decode_word(high: u8, low: u8) -> i16 {
    let value = ((high as i32) << 8) | low as i32;
    let signed = if value >= 0x8000 {
        value - 0x1_0000
    } else {
        value
    };
    signed as i16
}

/// One 14-byte burst read, owned by the caller and reused across reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawFrame {
    bytes: [u8; FRAME_LEN],
}

impl RawFrame {
    /// Zeroed frame, ready to be filled by a bus read.
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_LEN],
        }
    }

    /// Wrap bytes already read from the bus.
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    /// Mutable view for the bus driver to read into.
    pub fn as_mut_bytes(&mut self) -> &mut [u8; FRAME_LEN] {
        &mut self.bytes
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    fn word(&self, offset: usize) -> i16 {
        decode_word(self.bytes[offset], self.bytes[offset + 1])
    }

    fn triple(&self, offset: usize) -> [i16; 3] {
        [
            self.word(offset),
            self.word(offset + 2),
            self.word(offset + 4),
        ]
    }

    /// Signed accelerometer counts (x, y, z).
    pub fn accel_raw(&self) -> [i16; 3] {
        self.triple(ACCEL_OFFSET)
    }

    /// Signed temperature counts.
    pub fn temperature_raw(&self) -> i16 {
        self.word(TEMP_OFFSET)
    }

    /// Signed gyroscope counts (x, y, z).
    pub fn gyro_raw(&self) -> [i16; 3] {
        self.triple(GYRO_OFFSET)
    }

    /// Build a frame from signed counts. Inverse of the accessors; used by
    /// simulated buses and tests.
    pub fn encode(accel: [i16; 3], temperature: i16, gyro: [i16; 3]) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        let words = [
            accel[0],
            accel[1],
            accel[2],
            temperature,
            gyro[0],
            gyro[1],
            gyro[2],
        ];
        for (chunk, word) in bytes.chunks_exact_mut(2).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self { bytes }
    }
}
