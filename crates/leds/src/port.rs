/// Base address of the LED register on the original FPGA SoC.
pub const DEFAULT_GPIO_BASE: usize = 0x8000_0000;

/// Write-only sink for the state of 8 LEDs. Bit `i` of `value` is LED `i`,
/// set meaning "on".
pub trait LedPort {
    fn set_leds(&mut self, value: u8);
}

impl<P: LedPort + ?Sized> LedPort for &mut P {
    fn set_leds(&mut self, value: u8) {
        (**self).set_leds(value)
    }
}

/// How a logical "on" bit maps onto the wire.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Bit pattern to put on the pins so that the LEDs set in `value` light.
    pub const fn encode(self, value: u8) -> u8 {
        match self {
            Polarity::ActiveHigh => value,
            Polarity::ActiveLow => !value,
        }
    }
}

/// LEDs wired to a single memory-mapped 32-bit register.
///
/// The value is written as-is; boards with active-low LEDs invert it in
/// hardware.
pub struct MmioPort {
    reg: *mut u32,
}

impl MmioPort {
    /// # Safety
    ///
    /// `reg` must be valid for volatile 32-bit writes and suitably aligned for
    /// as long as the port is alive, and nothing else may write to it.
    pub const unsafe fn new(reg: *mut u32) -> Self {
        Self { reg }
    }

    /// # Safety
    ///
    /// Only sound on a target that maps the LED register at
    /// [`DEFAULT_GPIO_BASE`]. See [`MmioPort::new`].
    pub const unsafe fn at_default_base() -> Self {
        unsafe { Self::new(DEFAULT_GPIO_BASE as *mut u32) }
    }
}

impl LedPort for MmioPort {
    fn set_leds(&mut self, value: u8) {
        // SAFETY: guaranteed by the contract of `MmioPort::new`.
        unsafe { core::ptr::write_volatile(self.reg, u32::from(value)) }
    }
}
