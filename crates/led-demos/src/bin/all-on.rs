#![no_std]
#![no_main]

use embassy_executor::Spawner;

use leds::pattern;

use led_demos::{
    pins::board_leds,
    player::{Config, play},
};

use {defmt_rtt as _, panic_probe as _};

const CONFIG: Config = Config::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    defmt::info!("all on: {}", CONFIG);

    let mut port = board_leds(p, CONFIG.polarity);

    loop {
        play(&mut port, pattern::all_on(), &CONFIG).await;
    }
}
