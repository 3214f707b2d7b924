//! Mock I2C implementation for testing

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::I2cInterface,
    Result,
};
use std::collections::VecDeque;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification. Reads are served from a
/// queue of pre-programmed responses; once the queue is empty the last
/// response set with [`MockI2c::set_default_read`] (or zeros) is returned.
/// Failures can be injected per register write or for the next N reads.
#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: Vec<I2cTransaction>,
    queued_reads: VecDeque<Vec<u8>>,
    default_read: Vec<u8>,
    fail_write_register: Option<u8>,
    failing_reads: u32,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            queued_reads: VecDeque::new(),
            default_read: Vec::new(),
            fail_write_register: None,
            failing_reads: 0,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Queue one response for a future write-read
    pub fn queue_read(&mut self, data: &[u8]) {
        self.queued_reads.push_back(data.to_vec());
    }

    /// Response returned when the queue is empty
    pub fn set_default_read(&mut self, data: &[u8]) {
        self.default_read = data.to_vec();
    }

    /// Fail every write whose first byte is `register`
    pub fn fail_writes_to(&mut self, register: u8) {
        self.fail_write_register = Some(register);
    }

    /// Fail the next `count` write-reads with a NACK
    pub fn fail_next_reads(&mut self, count: u32) {
        self.failing_reads = count;
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });

        if self.fail_write_register.is_some() && data.first().copied() == self.fail_write_register
        {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::WriteRead {
            addr,
            write_data: write_data.to_vec(),
            read_len: read_buffer.len(),
        });

        if self.failing_reads > 0 {
            self.failing_reads -= 1;
            return Err(PlatformError::I2c(I2cError::Nack));
        }

        let response = self
            .queued_reads
            .pop_front()
            .unwrap_or_else(|| self.default_read.clone());
        read_buffer.fill(0);
        let to_read = core::cmp::min(read_buffer.len(), response.len());
        read_buffer[..to_read].copy_from_slice(&response[..to_read]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_write() {
        let mut i2c = MockI2c::new();
        i2c.write(0x68, &[0x6B, 0x00]).unwrap();

        assert_eq!(
            i2c.transactions(),
            &[I2cTransaction::Write {
                addr: 0x68,
                data: vec![0x6B, 0x00]
            }]
        );
    }

    #[test]
    fn test_mock_i2c_write_read_queue_then_default() {
        let mut i2c = MockI2c::new();
        i2c.queue_read(&[0x12, 0x34]);
        i2c.set_default_read(&[0xAB]);

        let mut buf = [0u8; 2];
        i2c.write_read(0x68, &[0x3B], &mut buf).unwrap();
        assert_eq!(buf, [0x12, 0x34]);

        i2c.write_read(0x68, &[0x3B], &mut buf).unwrap();
        assert_eq!(buf, [0xAB, 0x00]);

        assert_eq!(
            i2c.transactions()[0],
            I2cTransaction::WriteRead {
                addr: 0x68,
                write_data: vec![0x3B],
                read_len: 2
            }
        );
    }

    #[test]
    fn test_mock_i2c_write_fault() {
        let mut i2c = MockI2c::new();
        i2c.fail_writes_to(0x1B);

        assert!(i2c.write(0x68, &[0x1A, 0x01]).is_ok());
        assert_eq!(
            i2c.write(0x68, &[0x1B, 0x00]),
            Err(PlatformError::I2c(I2cError::Nack))
        );
        // Failed writes are still logged
        assert_eq!(i2c.transactions().len(), 2);
    }

    #[test]
    fn test_mock_i2c_read_fault_is_bounded() {
        let mut i2c = MockI2c::new();
        i2c.fail_next_reads(1);

        let mut buf = [0u8; 1];
        assert!(i2c.write_read(0x68, &[0x3B], &mut buf).is_err());
        assert!(i2c.write_read(0x68, &[0x3B], &mut buf).is_ok());
    }
}
