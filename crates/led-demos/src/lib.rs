#![no_std]

pub mod pins;
pub mod player;
