//! Menu Button Component
//!
//! A clickable labeled rectangle bound to a [`MenuAction`]. Buttons are
//! rendered procedurally (translucent fill + bitmap label) and hit-tested
//! in logical page coordinates. Hover state is fed in by the shell from
//! mouse-motion events.

use crate::input::MenuAction;
use crate::text::{char_height, draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill color (use alpha < 255 for the translucent menu look)
    pub fill: Color,

    /// Fill color while the mouse is over the button
    pub hover_fill: Color,

    /// Label text color
    pub text_color: Color,

    /// Label bitmap-font scale
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        // Translucent black with white text, per the main-menu styling
        ButtonStyle {
            fill: Color::RGBA(0, 0, 0, 150),
            hover_fill: Color::RGBA(50, 50, 60, 200),
            text_color: Color::RGB(255, 255, 255),
            text_scale: 2,
        }
    }
}

impl ButtonStyle {
    /// Light variant used by the help page's Back button
    pub fn light() -> Self {
        ButtonStyle {
            fill: Color::RGBA(255, 255, 255, 180),
            hover_fill: Color::RGBA(255, 255, 255, 230),
            text_color: Color::RGB(20, 20, 30),
            text_scale: 2,
        }
    }
}

/// A clickable menu button
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: MenuAction,
    pub hovered: bool,
    style: ButtonStyle,
}

impl Button {
    /// Creates a button with default styling
    pub fn new(rect: Rect, label: &str, action: MenuAction) -> Self {
        Button {
            rect,
            label: label.to_string(),
            action,
            hovered: false,
            style: ButtonStyle::default(),
        }
    }

    /// Creates a button with custom styling
    pub fn with_style(rect: Rect, label: &str, action: MenuAction, style: ButtonStyle) -> Self {
        Button {
            rect,
            label: label.to_string(),
            action,
            hovered: false,
            style,
        }
    }

    /// Hit-test a point in logical coordinates
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, so adjacent
    /// buttons never both claim a point.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.rect.x()
            && x < self.rect.x() + self.rect.width() as i32
            && y >= self.rect.y()
            && y < self.rect.y() + self.rect.height() as i32
    }

    /// Render the button: translucent fill, then centered label
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let fill = if self.hovered {
            self.style.hover_fill
        } else {
            self.style.fill
        };

        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(fill);
        canvas.fill_rect(self.rect)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        // Center the label inside the button rect
        let label_w = text_width(&self.label, self.style.text_scale) as i32;
        let label_h = char_height(self.style.text_scale) as i32;
        let label_x = self.rect.x() + (self.rect.width() as i32 - label_w) / 2;
        let label_y = self.rect.y() + (self.rect.height() as i32 - label_h) / 2;

        draw_simple_text(
            canvas,
            &self.label,
            label_x,
            label_y,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_button() -> Button {
        Button::new(Rect::new(100, 50, 200, 40), "HELP", MenuAction::ShowHelp)
    }

    #[test]
    fn test_contains_inside() {
        let button = test_button();
        assert!(button.contains(150, 70));
    }

    #[test]
    fn test_contains_edges() {
        let button = test_button();
        // Top-left inclusive
        assert!(button.contains(100, 50));
        // Right/bottom exclusive
        assert!(!button.contains(300, 70));
        assert!(!button.contains(150, 90));
        assert!(button.contains(299, 89));
    }

    #[test]
    fn test_contains_outside() {
        let button = test_button();
        assert!(!button.contains(99, 70));
        assert!(!button.contains(150, 49));
        assert!(!button.contains(0, 0));
    }

    #[test]
    fn test_default_style() {
        let style = ButtonStyle::default();
        assert_eq!(style.fill, Color::RGBA(0, 0, 0, 150));
        assert_eq!(style.text_color, Color::RGB(255, 255, 255));
        assert_eq!(style.text_scale, 2);
    }

    #[test]
    fn test_light_style() {
        let style = ButtonStyle::light();
        assert_eq!(style.fill, Color::RGBA(255, 255, 255, 180));
    }

    #[test]
    fn test_action_binding() {
        let button = test_button();
        assert_eq!(button.action, MenuAction::ShowHelp);
        assert!(!button.hovered);
    }
}
