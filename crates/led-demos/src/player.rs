use embassy_time::{Duration, Timer};

use leds::{Frame, LedPort, Polarity};

#[derive(Copy, Clone, PartialEq, defmt::Format)]
pub struct Config {
    /// Shortest time a frame stays on the LEDs.
    pub interval: Duration,
    pub polarity: Polarity,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            interval: Duration::from_millis(250),
            polarity: Polarity::ActiveHigh,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows each frame in turn, keeping it up for `hold` intervals.
pub async fn play<P, I>(port: &mut P, frames: I, cfg: &Config)
where
    P: LedPort,
    I: IntoIterator<Item = Frame>,
{
    for frame in frames {
        defmt::debug!("{}", frame);
        port.set_leds(frame.leds);
        Timer::after(cfg.interval * u32::from(frame.hold)).await;
    }
}
