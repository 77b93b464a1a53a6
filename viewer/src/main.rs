mod clock;
mod config;
mod error;
mod game_logic;
mod input;
mod simulation;
mod ui;

use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::clock::FrameClock;
use crate::config::Args;
use crate::game_logic::SceneState;
use crate::input::InputRecorder;
use crate::simulation::EngineLauncher;
use crate::ui::{Game, Menu, Step, UiContext, WindowSettings};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    tracing::info!(?args, "Larger than Life starting up");

    macroquad::Window::from_config(args.window_conf(), async move {
        if let Err(e) = run(args).await {
            tracing::error!("viewer stopped: {e:#}");
            std::process::exit(1);
        }
        tracing::info!("Larger than Life shutting down");
    });
}

async fn run(args: Args) -> anyhow::Result<()> {
    // window close must reach the active screen as an input event
    prevent_quit();

    let mut ctx = UiContext::new();
    let settings = WindowSettings {
        size: args.window_size as f32,
        frame_rate: args.fps,
        background: ctx.theme.window_bg,
    };
    let menu = Menu::new(settings.clone(), &ctx);
    let game = Game::new(settings, &ctx);
    let mut scenes = SceneState::new(menu, game, EngineLauncher::new(args.board_size()));
    let mut input = InputRecorder::new();
    let mut clock = FrameClock::new();

    loop {
        let events = input.drain();
        ctx.begin_frame();
        match scenes.step(&mut ctx, &events)? {
            Step::Quit => break,
            // the entered screen draws its first frame right away
            Step::TransitionTo(_) => continue,
            Step::Continue => {}
        }

        ctx.end_frame();
        next_frame().await;
        scenes.after_present();
        clock.throttle(scenes.frame_rate());
    }

    Ok(())
}
