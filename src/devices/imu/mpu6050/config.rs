//! MPU-6050 Configuration

use ezto_core::imu::SampleScale;

use super::registers;

/// Gyroscope full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroRange {
    /// ±250 °/s (default, best resolution for arm movements)
    #[default]
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    Dps2000,
}

impl GyroRange {
    /// Get the register value for this range
    pub fn register_value(self) -> u8 {
        match self {
            GyroRange::Dps250 => registers::GYRO_FS_SEL_250DPS,
            GyroRange::Dps500 => registers::GYRO_FS_SEL_500DPS,
            GyroRange::Dps1000 => registers::GYRO_FS_SEL_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_FS_SEL_2000DPS,
        }
    }

    /// Get the sensitivity (LSB per °/s) for this range
    pub fn sensitivity(self) -> f32 {
        match self {
            GyroRange::Dps250 => registers::GYRO_SENSITIVITY_250DPS,
            GyroRange::Dps500 => registers::GYRO_SENSITIVITY_500DPS,
            GyroRange::Dps1000 => registers::GYRO_SENSITIVITY_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_SENSITIVITY_2000DPS,
        }
    }
}

/// Accelerometer full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelRange {
    /// ±2 g (default)
    #[default]
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    G16,
}

impl AccelRange {
    /// Get the register value for this range
    pub fn register_value(self) -> u8 {
        match self {
            AccelRange::G2 => registers::ACCEL_FS_SEL_2G,
            AccelRange::G4 => registers::ACCEL_FS_SEL_4G,
            AccelRange::G8 => registers::ACCEL_FS_SEL_8G,
            AccelRange::G16 => registers::ACCEL_FS_SEL_16G,
        }
    }

    /// Get the sensitivity (LSB per g) for this range
    pub fn sensitivity(self) -> f32 {
        match self {
            AccelRange::G2 => registers::ACCEL_SENSITIVITY_2G,
            AccelRange::G4 => registers::ACCEL_SENSITIVITY_4G,
            AccelRange::G8 => registers::ACCEL_SENSITIVITY_8G,
            AccelRange::G16 => registers::ACCEL_SENSITIVITY_16G,
        }
    }
}

/// Digital Low Pass Filter configuration (CONFIG.DLPF_CFG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DlpfConfig {
    /// 260Hz accel / 256Hz gyro, filter off
    Bw260Hz,
    /// 184Hz bandwidth (default)
    #[default]
    Bw184Hz,
    /// 94Hz bandwidth
    Bw94Hz,
    /// 44Hz bandwidth
    Bw44Hz,
    /// 21Hz bandwidth
    Bw21Hz,
    /// 10Hz bandwidth
    Bw10Hz,
    /// 5Hz bandwidth
    Bw5Hz,
}

impl DlpfConfig {
    /// Get the CONFIG register value
    pub fn register_value(self) -> u8 {
        match self {
            DlpfConfig::Bw260Hz => 0,
            DlpfConfig::Bw184Hz => 1,
            DlpfConfig::Bw94Hz => 2,
            DlpfConfig::Bw44Hz => 3,
            DlpfConfig::Bw21Hz => 4,
            DlpfConfig::Bw10Hz => 5,
            DlpfConfig::Bw5Hz => 6,
        }
    }
}

/// MPU-6050 driver configuration
///
/// Defaults: address 0x68, 200 Hz output (1 kHz / (1 + 4)), 184 Hz DLPF,
/// ±250 °/s, ±2 g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mpu6050Config {
    /// I2C address (0x68 or 0x69 depending on AD0)
    pub i2c_address: u8,
    /// Sample rate divider
    pub sample_rate_div: u8,
    /// Low-pass filter bandwidth
    pub dlpf: DlpfConfig,
    /// Gyroscope full scale
    pub gyro_range: GyroRange,
    /// Accelerometer full scale
    pub accel_range: AccelRange,
}

impl Mpu6050Config {
    /// Configuration for a sensor with AD0 pulled high
    pub fn alternate_address() -> Self {
        Self {
            i2c_address: registers::MPU6050_ADDR_ALT,
            ..Self::default()
        }
    }

    /// Raw-count scale factors implied by the configured ranges
    pub fn scale(&self) -> SampleScale {
        SampleScale {
            accel_lsb_per_g: self.accel_range.sensitivity(),
            gyro_lsb_per_dps: self.gyro_range.sensitivity(),
        }
    }
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            i2c_address: registers::MPU6050_ADDR,
            sample_rate_div: 4,
            dlpf: DlpfConfig::Bw184Hz,
            gyro_range: GyroRange::Dps250,
            accel_range: AccelRange::G2,
        }
    }
}
