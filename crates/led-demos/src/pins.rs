use embassy_rp::gpio;

use leds::{LedPort, Polarity};

/// Eight GPIO outputs driven together; pin `i` shows bit `i`.
pub struct PinBank<'d> {
    pins: [gpio::Output<'d>; 8],
    polarity: Polarity,
}

impl<'d> PinBank<'d> {
    /// Takes the pins in bit order. All LEDs start off.
    pub fn new(pins: [gpio::Output<'d>; 8], polarity: Polarity) -> Self {
        let mut bank = Self { pins, polarity };
        bank.set_leds(0);
        bank
    }
}

impl LedPort for PinBank<'_> {
    fn set_leds(&mut self, value: u8) {
        let bits = self.polarity.encode(value);
        for (i, pin) in self.pins.iter_mut().enumerate() {
            pin.set_level(if bits & (1 << i) != 0 {
                gpio::Level::High
            } else {
                gpio::Level::Low
            });
        }
    }
}

/// The demo board's LEDs on GPIO1..GPIO8, LED0 on GPIO1.
pub fn board_leds(p: embassy_rp::Peripherals, polarity: Polarity) -> PinBank<'static> {
    PinBank::new(
        [
            gpio::Output::new(p.PIN_1, gpio::Level::Low),
            gpio::Output::new(p.PIN_2, gpio::Level::Low),
            gpio::Output::new(p.PIN_3, gpio::Level::Low),
            gpio::Output::new(p.PIN_4, gpio::Level::Low),
            gpio::Output::new(p.PIN_5, gpio::Level::Low),
            gpio::Output::new(p.PIN_6, gpio::Level::Low),
            gpio::Output::new(p.PIN_7, gpio::Level::Low),
            gpio::Output::new(p.PIN_8, gpio::Level::Low),
        ],
        polarity,
    )
}
