use crate::prime::primes;

/// One step of a demo: the LEDs to light and how many visible intervals to
/// keep them lit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub leds: u8,
    pub hold: u8,
}

impl Frame {
    pub const fn new(leds: u8) -> Self {
        Self { leds, hold: 1 }
    }

    pub const fn held(leds: u8, hold: u8) -> Self {
        Self { leds, hold }
    }
}

/// Every prime below 256 in binary, then a blank pause of two intervals.
pub fn prime_display() -> impl Iterator<Item = Frame> + Clone {
    primes()
        .map(Frame::new)
        .chain(core::iter::once(Frame::held(0, 2)))
}

/// A single lit LED walking from bit 0 to bit 7.
pub fn water_flow() -> impl Iterator<Item = Frame> + Clone {
    (0..u8::BITS).map(|i| Frame::new(1 << i))
}

pub fn all_on() -> impl Iterator<Item = Frame> + Clone {
    core::iter::once(Frame::new(0xff))
}
