#![no_std]

pub mod pattern;
pub mod port;
pub mod prime;

pub use pattern::Frame;
pub use port::{LedPort, MmioPort, Polarity};
pub use prime::{is_prime, primes};
