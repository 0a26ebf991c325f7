//! SDL2 window, event polling and frame pacing.
//!
//! Two presentation modes share one [`Window`]:
//! - [`Window::new`] uploads a CPU color buffer through a streaming texture
//!   (software renderer).
//! - [`Window::accelerated`] hands line segments to SDL's hardware-accelerated
//!   renderer (wireframe pipeline).

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};

use crate::colors;
use crate::config::{FPS_REPORT_INTERVAL_MS, FRAME_TARGET_TIME};
use crate::pipeline::LineSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

/// How a frame loop waits between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FramePacing {
    /// Sleep only as long as needed to hold [`crate::config::FPS`].
    TargetFps,
    /// Always wait a fixed number of milliseconds.
    FixedDelay(u64),
}

pub struct FrameLimiter {
    pacing: FramePacing,
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, pacing: FramePacing) -> Self {
        Self {
            pacing,
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Milliseconds to wait given the time already spent on this frame.
    pub fn wait_time(&self, elapsed: u64) -> u64 {
        match self.pacing {
            FramePacing::TargetFps => (FRAME_TARGET_TIME as u64).saturating_sub(elapsed),
            FramePacing::FixedDelay(ms) => ms,
        }
    }

    /// Waits according to the pacing and returns the delta time in milliseconds
    /// since the last call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let elapsed = window.timer().ticks64() - self.previous_frame_time;
        let wait = self.wait_time(elapsed);
        if wait > 0 {
            std::thread::sleep(std::time::Duration::from_millis(wait));
        }
        let current_time = window.timer().ticks64();
        let delta_time = current_time - self.previous_frame_time;
        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Averages frame times and reports the rate once per interval.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed_ms: u64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame; returns the measured rate when an interval completes.
    pub fn tick(&mut self, delta_ms: u64) -> Option<f32> {
        self.frames += 1;
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms < FPS_REPORT_INTERVAL_MS {
            return None;
        }
        let fps = self.frames as f32 * 1000.0 / self.elapsed_ms as f32;
        self.frames = 0;
        self.elapsed_ms = 0;
        debug!("{fps:.1} fps");
        Some(fps)
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before the creator so it is dropped first.
    texture: Option<sdl2::render::Texture<'static>>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a window that presents ARGB8888 color buffers.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let mut window = Self::open(title, width, height, false)?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture field is declared first, so it is dropped before the creator.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(window.texture_creator.as_ref() as *const _) };
        window.texture = Some(
            texture_creator_ref
                .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
                .map_err(|e| e.to_string())?,
        );
        Ok(window)
    }

    /// Opens a window backed by the hardware-accelerated renderer.
    pub fn accelerated(title: &str, width: u32, height: u32) -> Result<Self, String> {
        Self::open(title, width, height, true)
    }

    fn open(title: &str, width: u32, height: u32, accelerated: bool) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut builder = window.into_canvas();
        if accelerated {
            builder = builder.accelerated();
        }
        let canvas = builder.build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        info!(
            "opened {width}x{height} window \"{title}\" ({} renderer)",
            canvas.info().name
        );

        Ok(Self {
            canvas,
            texture: None,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                _ => {}
            }
        }
        WindowEvent::None
    }

    /// Uploads a full-window ARGB8888 buffer and presents it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        let texture = self
            .texture
            .as_mut()
            .ok_or_else(|| "window has no streaming texture; open it with Window::new".to_string())?;
        texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    /// Clears to `background`, draws each segment in its own color and presents.
    pub fn present_lines(&mut self, lines: &[LineSegment], background: u32) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl_color(background));
        self.canvas.clear();
        for line in lines {
            self.canvas.set_draw_color(to_sdl_color(line.color));
            self.canvas.draw_line(
                Point::new(line.from.x as i32, line.from.y as i32),
                Point::new(line.to.x as i32, line.to.y as i32),
            )?;
        }
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

fn to_sdl_color(color: u32) -> Color {
    let (r, g, b) = colors::unpack_color(color);
    Color::RGB(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_counter_reports_once_per_interval() {
        let mut counter = FpsCounter::new();
        let mut reports = Vec::new();
        for _ in 0..120 {
            if let Some(fps) = counter.tick(1000 / 60) {
                reports.push(fps);
            }
        }
        assert_eq!(reports.len(), 1);
        assert!((reports[0] - 62.5).abs() < 0.5, "{reports:?}");
    }

    #[test]
    fn sdl_color_conversion_keeps_channels() {
        let c = to_sdl_color(colors::pack_color(1, 2, 3));
        assert_eq!((c.r, c.g, c.b, c.a), (1, 2, 3, 255));
    }
}
