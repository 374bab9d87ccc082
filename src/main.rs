use sdl2::image::LoadTexture;

mod button;
mod config;
mod error;
mod fade;
mod input;
mod page;
mod shell;
mod stack;
mod text;

use config::MenuConfig;
use input::InputSystem;
use page::PageKind;
use shell::{MenuShell, ShellSignal};
use std::time::Duration;

// Logical resolution; the fullscreen window scales this up
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 360;

/// Background texture loading with graceful degradation
///
/// A missing or unreadable image is a warning, not a startup failure:
/// the page renders with a blank background instead.
fn load_background<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Option<sdl2::render::Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            eprintln!("Warning: could not load background {}: {}", path, e);
            None
        }
    }
}

fn main() -> Result<(), String> {
    let config = MenuConfig::load_or_default("assets/config/menu.json");

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window_title, SCREEN_WIDTH, SCREEN_HEIGHT)
        .fullscreen_desktop()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps page layout resolution-independent; SDL scales
    // rendering and mouse coordinates for us
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // One image, shared by both pages (the help page darkens it with its
    // own text panel)
    let background = load_background(&texture_creator, &config.background_path);

    let mut shell = MenuShell::new(Duration::from_millis(config.fade_duration_ms));
    shell.register_page(
        PageKind::MainMenu,
        PageKind::MainMenu.build(background.as_ref(), &config),
    );
    shell.register_page(
        PageKind::Help,
        PageKind::Help.build(background.as_ref(), &config),
    );

    let input_system = InputSystem::new();

    'running: loop {
        for event in input_system.poll_events(&mut event_pump) {
            match shell.handle_event(&event)? {
                ShellSignal::Quit => break 'running,
                ShellSignal::Continue => {}
            }
        }

        shell.update();

        canvas.set_draw_color(sdl2::pixels::Color::RGB(0, 0, 0));
        canvas.clear();
        shell.render(&mut canvas)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
