use anyhow::{Context, Result};
use log::{debug, info};

use spinning_cube::config::{SOFTWARE_ROTATION_STEP, SOFTWARE_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH};
use spinning_cube::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut window = Window::new(SOFTWARE_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .map_err(anyhow::Error::msg)
        .context("failed to open window")?;
    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    info!("software renderer using {} rasterizer", engine.rasterizer());

    let mut frame_limiter = FrameLimiter::new(&window, FramePacing::TargetFps);
    let mut fps_counter = FpsCounter::new();
    let mut state = RotationState::default();
    let mut band = select_band(state.y);

    while window.poll_events() != WindowEvent::Quit {
        let current_band = select_band(state.y);
        if current_band != band {
            debug!("visible face: {band} -> {current_band}");
            band = current_band;
        }

        let frame = engine.prepare(&state);
        engine.render(&frame);
        window
            .present(engine.frame_buffer())
            .map_err(anyhow::Error::msg)
            .context("failed to present frame")?;

        state = state.advance(SOFTWARE_ROTATION_STEP);

        let delta_time = frame_limiter.wait_and_get_delta(&window);
        fps_counter.tick(delta_time);
    }

    info!("quit requested, shutting down");
    Ok(())
}
