use anyhow::{Context, Result};
use log::info;

use spinning_cube::colors::HARDWARE_BACKGROUND;
use spinning_cube::config::{
    HARDWARE_EYE_OFFSET, HARDWARE_FRAME_DELAY_MS, HARDWARE_ROTATION_STEP_DEGREES,
    HARDWARE_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use spinning_cube::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut window = Window::accelerated(HARDWARE_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .map_err(anyhow::Error::msg)
        .context("failed to open accelerated window")?;
    let mut pipeline = Pipeline::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let cube = Cube::wire();
    info!("pipeline ready with {} point lights", pipeline.lights().len());

    let mut frame_limiter =
        FrameLimiter::new(&window, FramePacing::FixedDelay(HARDWARE_FRAME_DELAY_MS));
    let mut fps_counter = FpsCounter::new();
    // Degrees, advanced before each frame is drawn.
    let mut rotation = RotationState::default();

    while window.poll_events() != WindowEvent::Quit {
        rotation = rotation.advance(HARDWARE_ROTATION_STEP_DEGREES);

        let lines = pipeline
            .place(HARDWARE_EYE_OFFSET, &rotation)
            .draw_lines(cube.vertices(), cube.edges());
        window
            .present_lines(&lines, HARDWARE_BACKGROUND)
            .map_err(anyhow::Error::msg)
            .context("failed to present frame")?;

        let delta_time = frame_limiter.wait_and_get_delta(&window);
        fps_counter.tick(delta_time);
    }

    info!("quit requested, shutting down");
    Ok(())
}
