//! RGB status LED on three GPIO outputs

use crate::devices::traits::{Indicator, IndicatorError};
use crate::platform::{traits::GpioInterface, GpioError, GpioMode, PlatformError};

/// Electrical level that lights a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Common-cathode LED: pin high = on
    #[default]
    ActiveHigh,
    /// Common-anode LED: pin low = on
    ActiveLow,
}

impl Polarity {
    const fn level(self, on: bool) -> bool {
        match self {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        }
    }
}

/// Three-pin RGB LED
///
/// Channels are driven red, green, blue in that order; the first failing
/// pin aborts the update, leaving the later channels unchanged.
pub struct RgbIndicator<P: GpioInterface> {
    pins: [P; 3],
    polarity: Polarity,
}

impl<P: GpioInterface> RgbIndicator<P> {
    pub fn new(red: P, green: P, blue: P, polarity: Polarity) -> Self {
        Self {
            pins: [red, green, blue],
            polarity,
        }
    }

    /// Logical on/off state of each channel as currently driven
    pub fn channels(&self) -> [bool; 3] {
        [
            self.polarity.level(self.pins[0].read()),
            self.polarity.level(self.pins[1].read()),
            self.polarity.level(self.pins[2].read()),
        ]
    }

    /// Borrow the pins (red, green, blue)
    pub fn pins(&self) -> &[P; 3] {
        &self.pins
    }

    /// Mutably borrow the pins (red, green, blue)
    pub fn pins_mut(&mut self) -> &mut [P; 3] {
        &mut self.pins
    }
}

fn channel_error(channel: usize, e: PlatformError) -> IndicatorError {
    IndicatorError {
        channel: channel as u8,
        cause: match e {
            PlatformError::Gpio(cause) => cause,
            _ => GpioError::WriteFailed,
        },
    }
}

impl<P: GpioInterface> Indicator for RgbIndicator<P> {
    /// Switch every pin to push-pull output, then drive all channels off
    fn init(&mut self) -> Result<(), IndicatorError> {
        for (channel, pin) in self.pins.iter_mut().enumerate() {
            pin.set_mode(GpioMode::OutputPushPull).map_err(|e| channel_error(channel, e))?;
        }
        self.set_channels(false, false, false)
    }

    fn set_channels(&mut self, r: bool, g: bool, b: bool) -> Result<(), IndicatorError> {
        let polarity = self.polarity;
        for (channel, (pin, on)) in self.pins.iter_mut().zip([r, g, b]).enumerate() {
            pin.set_level(polarity.level(on)).map_err(|e| channel_error(channel, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockGpio;
    use ezto_core::classifier::StatusColor;
    use ezto_core::indicator::IndicatorState;

    fn led(polarity: Polarity) -> RgbIndicator<MockGpio> {
        RgbIndicator::new(
            MockGpio::new_output(),
            MockGpio::new_output(),
            MockGpio::new_output(),
            polarity,
        )
    }

    fn levels(led: &RgbIndicator<MockGpio>) -> [bool; 3] {
        [led.pins()[0].read(), led.pins()[1].read(), led.pins()[2].read()]
    }

    #[test]
    fn test_color_mapping_active_high() {
        let mut led = led(Polarity::ActiveHigh);

        led.show(IndicatorState::for_color(StatusColor::Red)).unwrap();
        assert_eq!(levels(&led), [true, false, false]);

        led.show(IndicatorState::for_color(StatusColor::Yellow)).unwrap();
        assert_eq!(levels(&led), [true, true, false]);

        led.show(IndicatorState::for_color(StatusColor::Green)).unwrap();
        assert_eq!(levels(&led), [false, true, false]);
    }

    #[test]
    fn test_active_low_inverts_levels() {
        let mut led = led(Polarity::ActiveLow);
        led.show(IndicatorState::for_color(StatusColor::Yellow)).unwrap();

        assert_eq!(levels(&led), [false, false, true]);
        assert_eq!(led.channels(), [true, true, false]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mut led = led(Polarity::ActiveHigh);
        for _ in 0..5 {
            led.show(IndicatorState::for_color(StatusColor::Green)).unwrap();
            assert_eq!(led.channels(), [false, true, false]);
        }
    }

    #[test]
    fn test_init_configures_outputs_off() {
        let mut led = RgbIndicator::new(
            MockGpio::new_input(),
            MockGpio::new_input(),
            MockGpio::new_input(),
            Polarity::ActiveLow,
        );
        assert!(led.show(IndicatorState::for_color(StatusColor::Red)).is_err());

        led.init().unwrap();
        assert_eq!(levels(&led), [true, true, true]);
        assert_eq!(led.channels(), [false, false, false]);

        led.show(IndicatorState::for_color(StatusColor::Red)).unwrap();
        assert_eq!(led.channels(), [true, false, false]);
    }

    #[test]
    fn test_pin_failure_reports_channel() {
        let mut led = led(Polarity::ActiveHigh);
        led.pins_mut()[1].set_fault(true);

        assert_eq!(
            led.set_channels(true, true, false),
            Err(IndicatorError {
                channel: 1,
                cause: GpioError::WriteFailed
            })
        );
        // Red was driven before green failed; blue untouched
        assert_eq!(led.pins()[0].writes(), 1);
        assert_eq!(led.pins()[2].writes(), 0);
    }
}
