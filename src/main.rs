//! IMU telemetry chart simulator.
//!
//! Runs the scrolling chart in a desktop window against a synthetic IMU
//! signal source. The loop runs at ~50 FPS: every frame it polls the sensor
//! and queues the reading, and every `TICK_FRAMES` frames it fires a chart
//! tick and repaints. Sampling faster than the repaint rate exercises the
//! between-tick averaging the same way a real sensor notification stream
//! would.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `C` | Switch channel (accelerometer <-> gyroscope) |
//! | `X` | Toggle FPS readout on/off |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use imu_scope::colors::WHITE;
use imu_scope::config::{
    CHART_MARGIN, CHART_WINDOW, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_FRAMES,
};
use imu_scope::widgets::{draw_chart, draw_fps};
use imu_scope::{Channel, ChartScale, SyntheticImu, VectorChart, VectorSensor};

/// Build a chart sized to the screen for the given channel.
fn make_chart(channel: Channel) -> VectorChart {
    let scale = ChartScale::new(SCREEN_WIDTH, SCREEN_HEIGHT, CHART_MARGIN, CHART_WINDOW, channel.range());
    VectorChart::new(channel, scale)
}

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("IMU Scope", &output_settings);

    // Chart and signal source for the active channel
    let mut channel = Channel::default();
    let mut chart = make_chart(channel);
    let mut sensor = SyntheticImu::new(channel);

    // FPS counter state (X button toggles visibility)
    let mut show_fps = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Frame counter driving the tick cadence
    let mut frame_count = 0u32;

    // First frame: blank chart so the window is not empty before tick one
    display.clear(WHITE).ok();
    draw_chart(&mut display, &chart);
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // C: switch channel; history is per-channel so start fresh
                        Keycode::C => {
                            channel = channel.toggle();
                            chart = make_chart(channel);
                            sensor = SyntheticImu::new(channel);
                            display.clear(WHITE).ok();
                            draw_chart(&mut display, &chart);
                        }
                        // X: toggle FPS readout
                        Keycode::X => {
                            show_fps = !show_fps;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Poll the sensor every frame; the chart averages between ticks
        chart.handle_sample(sensor.read());

        // FPS calculation (updated once per second)
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // Repaint on tick boundaries only; between ticks the frame is static
        frame_count = frame_count.wrapping_add(1);
        if frame_count.is_multiple_of(TICK_FRAMES) {
            chart.tick();
            display.clear(WHITE).ok();
            draw_chart(&mut display, &chart);
            if show_fps {
                draw_fps(&mut display, current_fps);
            }
        }

        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
