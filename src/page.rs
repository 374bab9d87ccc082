//! Pages and Page Builders
//!
//! A [`Page`] is a full-screen static visual tree: an optional background
//! texture, translucent panels, text blocks, and buttons, all positioned
//! in absolute logical coordinates. Pages are built once at startup by
//! their [`PageKind`] builder and owned by the page stack until exit.
//!
//! Background textures are borrowed, not owned: `main` loads and owns the
//! textures (they are tied to the texture creator's lifetime) and each
//! page holds a reference, the same borrowing used for sprite sheets. A
//! missing background asset becomes `None` and the page still constructs
//! with a blank background.

use crate::button::{Button, ButtonStyle};
use crate::config::MenuConfig;
use crate::input::MenuAction;
use crate::text::{draw_text_block, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// The page variants the shell knows how to build
///
/// Adding a page means adding a variant here plus its arm in
/// [`PageKind::build`]; the exhaustive match keeps the registry honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    MainMenu,
    Help,
}

/// A positioned multi-line text element
pub struct TextBlock {
    pub x: i32,
    pub y: i32,
    pub lines: Vec<String>,
    pub color: Color,
    pub scale: u32,
    pub line_spacing: u32,
}

/// A translucent filled rectangle (help-page text backdrop)
pub struct Panel {
    pub rect: Rect,
    pub color: Color,
}

/// A full-screen page: background plus absolutely positioned children
pub struct Page<'a> {
    background: Option<&'a Texture<'a>>,
    panels: Vec<Panel>,
    texts: Vec<TextBlock>,
    buttons: Vec<Button>,
}

impl<'a> Page<'a> {
    /// Creates an empty page over the given background (None = blank)
    pub fn new(background: Option<&'a Texture<'a>>) -> Self {
        Page {
            background,
            panels: Vec::new(),
            texts: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn add_text(&mut self, text: TextBlock) {
        self.texts.push(text);
    }

    pub fn add_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Finds the button under a point, if any
    pub fn button_at(&self, x: i32, y: i32) -> Option<&Button> {
        self.buttons.iter().find(|button| button.contains(x, y))
    }

    /// Updates hover flags from the current mouse position
    pub fn update_hover(&mut self, x: i32, y: i32) {
        for button in &mut self.buttons {
            button.hovered = button.contains(x, y);
        }
    }

    /// Renders the page bottom-up: background, panels, text, buttons
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if let Some(texture) = self.background {
            // Stretch to the full logical viewport
            canvas.copy(texture, None, None)?;
        }

        for panel in &self.panels {
            canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
            canvas.set_draw_color(panel.color);
            canvas.fill_rect(panel.rect)?;
            canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }

        for text in &self.texts {
            draw_text_block(
                canvas,
                &text.lines,
                text.x,
                text.y,
                text.color,
                text.scale,
                text.line_spacing,
            )?;
        }

        for button in &self.buttons {
            button.render(canvas)?;
        }

        Ok(())
    }
}

impl PageKind {
    /// Builds this page's static visual tree
    ///
    /// Called once per variant at startup. `background` may be None when
    /// the asset failed to load; the page is then blank behind its
    /// children.
    pub fn build<'a>(self, background: Option<&'a Texture<'a>>, config: &MenuConfig) -> Page<'a> {
        match self {
            PageKind::MainMenu => build_main_menu(background, config),
            PageKind::Help => build_help(background, config),
        }
    }
}

/// Main menu: title plus the four stacked center buttons
fn build_main_menu<'a>(background: Option<&'a Texture<'a>>, config: &MenuConfig) -> Page<'a> {
    let mut page = Page::new(background);

    let screen_w = crate::SCREEN_WIDTH as i32;
    let screen_h = crate::SCREEN_HEIGHT as i32;

    // Title, centered near the top
    let title = "FATEWALKER";
    page.add_text(TextBlock {
        x: (screen_w - text_width(title, 4) as i32) / 2,
        y: 40,
        lines: vec![title.to_string()],
        color: Color::RGB(230, 225, 210),
        scale: 4,
        line_spacing: 0,
    });

    let bw = config.button_width;
    let bh = config.button_height as i32;
    let spacing = config.button_spacing as i32;
    let button_x = (screen_w - bw as i32) / 2;
    // Column centered so two buttons sit above mid-height, two below
    let start_y = screen_h / 2 - (2 * bh + 3 * spacing / 2);

    let entries = [
        ("NEW GAME", MenuAction::NewGame),
        ("LOAD FILE", MenuAction::LoadFile),
        ("HELP", MenuAction::ShowHelp),
        ("QUIT", MenuAction::Quit),
    ];

    for (i, (label, action)) in entries.iter().enumerate() {
        let y = start_y + i as i32 * (bh + spacing);
        page.add_button(Button::new(
            Rect::new(button_x, y, bw, bh as u32),
            label,
            *action,
        ));
    }

    page
}

/// Help page: darkened text panel over the shared background, plus Back
fn build_help<'a>(background: Option<&'a Texture<'a>>, config: &MenuConfig) -> Page<'a> {
    let mut page = Page::new(background);

    let screen_w = crate::SCREEN_WIDTH as i32;
    let screen_h = crate::SCREEN_HEIGHT as i32;

    let panel_rect = Rect::new(70, 40, (screen_w - 140) as u32, (screen_h - 130) as u32);
    page.add_panel(Panel {
        rect: panel_rect,
        color: Color::RGBA(0, 0, 0, 180),
    });

    page.add_text(TextBlock {
        x: panel_rect.x() + 20,
        y: panel_rect.y() + 16,
        lines: vec!["FATEWALKER - HELP".to_string()],
        color: Color::RGB(255, 255, 255),
        scale: 2,
        line_spacing: 0,
    });

    page.add_text(TextBlock {
        x: panel_rect.x() + 20,
        y: panel_rect.y() + 52,
        lines: config.help_lines.clone(),
        color: Color::RGB(220, 220, 220),
        scale: 1,
        line_spacing: 5,
    });

    page.add_button(Button::with_style(
        Rect::new(
            (screen_w - config.button_width as i32) / 2,
            screen_h - 48,
            config.button_width,
            config.button_height,
        ),
        "BACK TO MENU",
        MenuAction::BackToMenu,
        ButtonStyle::light(),
    ));

    page
}
