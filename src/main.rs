#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]
mod action;
mod car;
mod clock;
mod config;
mod game;
mod lane;
mod record;
mod render;
mod spawner;

use color_eyre::Result;
use macroquad::window::{next_frame, Conf};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::action::Controls;
use crate::clock::FramePacer;
use crate::config::{GameConfig, Palette, Tuning};
use crate::game::Game;

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Lanes".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(report) = run().await {
        log::error!("{report}");
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    let mut game = Game::new(
        config.clone(),
        Tuning::default(),
        Palette::default(),
        StdRng::from_entropy(),
    )?;
    log::info!(
        "track {}x{} with {} lanes at {} fps",
        config.width,
        config.height,
        config.lane_count,
        config.fps
    );

    macroquad::input::prevent_quit();
    let mut pacer = FramePacer::new(config.fps);

    while game.is_running() {
        game.update(&Controls::poll());
        render::draw(&game);
        pacer.wait();
        next_frame().await;
    }

    let summary = game.finish().to_json(&config);
    println!("{summary}");

    Ok(())
}
