//! First-person tile-map viewer.
//!
//! ```bash
//! cargo run --release -- [--map arena.map] [--textures walls.tpak]
//! ```
//! Arrows / WASD walk and turn, Escape quits.

use std::{
    f32::consts::FRAC_PI_2,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, Window, WindowOptions};

use tilecast_rs::{
    assets::load_assets,
    config::Config,
    engine::{Ray, Screen, cast_all_rays},
    renderer::{FrameContext, RendererExt, Software},
    sim::{FrameClock, InputCmd, move_viewpoint, player_input, spawn_point},
    world::Viewpoint,
};

fn read_input(win: &Window) -> InputCmd {
    let down = |a: Key, b: Key| win.is_key_down(a) || win.is_key_down(b);
    InputCmd {
        turn: InputCmd::axis(down(Key::Left, Key::A), down(Key::Right, Key::D)),
        walk: InputCmd::axis(down(Key::Down, Key::S), down(Key::Up, Key::W)),
        quit: win.is_key_down(Key::Escape),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();
    log::debug!("{cfg:?}");

    let (map, bank) = load_assets(cfg.map.as_deref(), cfg.textures.as_deref())
        .context("loading map and textures")?;

    let start = spawn_point(&map, map.center()).context("map has no open cell to stand in")?;
    let mut viewpoint = Viewpoint::new(start, FRAC_PI_2, cfg.walk_speed, cfg.turn_radians());

    let (w, h) = (cfg.width as usize, cfg.height as usize);
    let screen = Screen::new(w, h, cfg.fov_radians());
    let mut renderer = Software::default();
    let mut rays: Vec<Ray> = Vec::with_capacity(w);

    let mut win = Window::new("tilecast", w, h, WindowOptions::default())?;
    win.set_target_fps(cfg.fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    let mut clock = FrameClock::new();

    while win.is_open() {
        let cmd = read_input(&win);
        if cmd.quit {
            break;
        }
        player_input(&mut viewpoint, cmd);

        let dt = clock.tick();
        move_viewpoint(&mut viewpoint, &map, dt);

        let t0 = Instant::now();
        cast_all_rays(&map, &viewpoint, &screen, &mut rays);
        let frame = FrameContext {
            map: &map,
            viewpoint: &viewpoint,
            rays: &rays,
            bank: &bank,
        };
        renderer
            .draw_frame(&screen, &frame, cfg.minimap(), |fb, w, h| {
                acc_time += t0.elapsed();
                acc_frames += 1;
                win.update_with_buffer(fb, w, h)
            })??;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            log::info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
