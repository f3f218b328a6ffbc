mod config;
mod game;
mod input;
mod pos;
mod render;
mod ticker;

use anyhow::Context;
use config::{GRID_HEIGHT, GRID_WIDTH, HEIGHT, TICK_RATE_HZ, TITLE, WIDTH};
use game::{End, Game, Outcome, State};
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use ticker::Ticker;
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface_texture).context("failed to create pixel surface")?
    };

    let mut game = Game::new(GRID_WIDTH, GRID_HEIGHT);
    let mut ticker = Ticker::new(TICK_RATE_HZ, Instant::now());
    info!(
        "grid {}x{}, step every {:?}, food at {:?}",
        GRID_WIDTH,
        GRID_HEIGHT,
        ticker.interval(),
        game.food()
    );

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            render::draw(pixels.frame_mut(), &game);
            if let Err(err) = pixels.render() {
                error!("failed to present frame: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            for cmd in input::commands(&input) {
                game.apply(cmd);
            }

            if let State::Terminated(End::Quit) = game.state() {
                info!("quit, score {}", game.score());
                *control_flow = ControlFlow::Exit;
                return;
            }

            if ticker.poll(Instant::now()) {
                if let Outcome::Ended(end) = game.step() {
                    info!(
                        "game over ({:?}), score {}, length {}",
                        end,
                        game.score(),
                        game.snake().len()
                    );
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                window.request_redraw();
            }

            *control_flow = ControlFlow::WaitUntil(ticker.deadline());
        }
    });
}
