//! Menu Shell
//!
//! Owns the page stack, the in-flight fade overlays, and the
//! `PageKind -> index` registry. All input reaches the shell as data
//! ([`InputEvent`], then [`MenuAction`]) and is dispatched through one
//! exhaustive match, so no handler holds a reference into the page tree.
//!
//! The dispatch order for a page switch matters: the stack switches
//! synchronously first, then the fade starts, so the new page is already
//! rendered behind the opaque overlay on the next frame.

use crate::error::MenuError;
use crate::fade::FadeIn;
use crate::input::{InputEvent, MenuAction};
use crate::page::{Page, PageKind};
use crate::stack::PageStack;
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::collections::HashMap;
use std::time::Duration;

/// What the main loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    Continue,
    Quit,
}

/// The menu shell: page stack + transitions + action dispatch
pub struct MenuShell<'a> {
    stack: PageStack<'a>,
    fades: Vec<FadeIn>,
    indices: HashMap<PageKind, usize>,
    fade_duration: Duration,
}

impl<'a> MenuShell<'a> {
    pub fn new(fade_duration: Duration) -> Self {
        MenuShell {
            stack: PageStack::new(),
            fades: Vec::new(),
            indices: HashMap::new(),
            fade_duration,
        }
    }

    /// Adds a page to the stack and records its kind in the registry
    ///
    /// The first registered page is the one initially visible.
    pub fn register_page(&mut self, kind: PageKind, page: Page<'a>) -> usize {
        let index = self.stack.add_page(page);
        self.indices.insert(kind, index);
        index
    }

    /// Looks up the stack index a page kind was registered at
    pub fn page_index(&self, kind: PageKind) -> Result<usize, MenuError> {
        self.indices
            .get(&kind)
            .copied()
            .ok_or(MenuError::PageNotRegistered(kind))
    }

    /// Handles one input event, resolving clicks and keys to actions
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<ShellSignal, MenuError> {
        match *event {
            InputEvent::Quit => Ok(ShellSignal::Quit),
            InputEvent::Click(x, y) => {
                let action = self
                    .stack
                    .current_page()
                    .and_then(|page| page.button_at(x, y))
                    .map(|button| button.action);
                match action {
                    Some(action) => self.handle_action(action),
                    None => Ok(ShellSignal::Continue),
                }
            }
            InputEvent::MouseMove(x, y) => {
                if let Some(page) = self.stack.current_page_mut() {
                    page.update_hover(x, y);
                }
                Ok(ShellSignal::Continue)
            }
            InputEvent::KeyPress(key) => match self.action_for_key(key) {
                Some(action) => self.handle_action(action),
                None => Ok(ShellSignal::Continue),
            },
        }
    }

    /// Keyboard conveniences: Escape backs out of help, quits from menu
    pub fn action_for_key(&self, key: Keycode) -> Option<MenuAction> {
        if key != Keycode::Escape {
            return None;
        }

        let current = self.stack.current_index();
        if self.indices.get(&PageKind::Help) == Some(&current) {
            Some(MenuAction::BackToMenu)
        } else {
            Some(MenuAction::Quit)
        }
    }

    /// The action dispatch table
    ///
    /// Page switches happen here synchronously; the fade pushed right
    /// after covers the seam.
    pub fn handle_action(&mut self, action: MenuAction) -> Result<ShellSignal, MenuError> {
        match action {
            MenuAction::NewGame => {
                // Extension point: no game behind the menu yet
                println!("New Game: not implemented");
                Ok(ShellSignal::Continue)
            }
            MenuAction::LoadFile => {
                println!("Load File: not implemented");
                Ok(ShellSignal::Continue)
            }
            MenuAction::ShowHelp => {
                self.switch_to(PageKind::Help)?;
                Ok(ShellSignal::Continue)
            }
            MenuAction::BackToMenu => {
                self.switch_to(PageKind::MainMenu)?;
                Ok(ShellSignal::Continue)
            }
            MenuAction::Quit => Ok(ShellSignal::Quit),
        }
    }

    /// Switch pages, then start a fresh fade over the new page
    fn switch_to(&mut self, kind: PageKind) -> Result<(), MenuError> {
        let index = self.page_index(kind)?;
        self.stack.show(index)?;
        self.fades.push(FadeIn::with_duration(self.fade_duration));
        Ok(())
    }

    /// Drops fades that have reached full transparency
    pub fn update(&mut self) {
        self.fades.retain(|fade| !fade.is_finished());
    }

    /// Renders the current page, then all overlays on top
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.stack.render(canvas)?;
        for fade in &self.fades {
            fade.render(canvas)?;
        }
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.stack.current_index()
    }

    pub fn active_fades(&self) -> &[FadeIn] {
        &self.fades
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;

    fn test_shell() -> MenuShell<'static> {
        let config = MenuConfig::default();
        let mut shell = MenuShell::new(Duration::from_millis(800));
        shell.register_page(PageKind::MainMenu, PageKind::MainMenu.build(None, &config));
        shell.register_page(PageKind::Help, PageKind::Help.build(None, &config));
        shell
    }

    #[test]
    fn test_starts_on_main_menu() {
        let shell = test_shell();
        assert_eq!(shell.current_index(), shell.page_index(PageKind::MainMenu).unwrap());
        assert!(shell.active_fades().is_empty());
    }

    #[test]
    fn test_show_help_switches_and_fades() {
        let mut shell = test_shell();

        let signal = shell.handle_action(MenuAction::ShowHelp).unwrap();

        assert_eq!(signal, ShellSignal::Continue);
        // Page switched immediately
        assert_eq!(shell.current_index(), shell.page_index(PageKind::Help).unwrap());
        // One fresh overlay, fully opaque at start
        assert_eq!(shell.active_fades().len(), 1);
        assert_eq!(shell.active_fades()[0].alpha_at(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_back_to_menu() {
        let mut shell = test_shell();
        shell.handle_action(MenuAction::ShowHelp).unwrap();

        shell.handle_action(MenuAction::BackToMenu).unwrap();

        assert_eq!(shell.current_index(), shell.page_index(PageKind::MainMenu).unwrap());
        // Second, independent overlay (no cancellation of the first)
        assert_eq!(shell.active_fades().len(), 2);
    }

    #[test]
    fn test_quit_signal() {
        let mut shell = test_shell();
        assert_eq!(shell.handle_action(MenuAction::Quit).unwrap(), ShellSignal::Quit);
    }

    #[test]
    fn test_stub_actions_are_inert() {
        let mut shell = test_shell();
        let before = shell.current_index();

        assert_eq!(shell.handle_action(MenuAction::NewGame).unwrap(), ShellSignal::Continue);
        assert_eq!(shell.handle_action(MenuAction::LoadFile).unwrap(), ShellSignal::Continue);

        assert_eq!(shell.current_index(), before);
        assert!(shell.active_fades().is_empty());
    }

    #[test]
    fn test_update_drops_finished_fades() {
        let mut shell = MenuShell::new(Duration::ZERO);
        let config = MenuConfig::default();
        shell.register_page(PageKind::MainMenu, PageKind::MainMenu.build(None, &config));
        shell.register_page(PageKind::Help, PageKind::Help.build(None, &config));

        shell.handle_action(MenuAction::ShowHelp).unwrap();
        assert_eq!(shell.active_fades().len(), 1);

        // Zero-duration fade completes immediately
        shell.update();
        assert!(shell.active_fades().is_empty());
    }

    #[test]
    fn test_unregistered_page_is_an_error() {
        let config = MenuConfig::default();
        let mut shell = MenuShell::new(Duration::from_millis(800));
        shell.register_page(PageKind::MainMenu, PageKind::MainMenu.build(None, &config));

        let err = shell.handle_action(MenuAction::ShowHelp).unwrap_err();
        assert!(matches!(err, MenuError::PageNotRegistered(PageKind::Help)));
        // Failed dispatch leaves the shell where it was
        assert_eq!(shell.current_index(), 0);
    }

    #[test]
    fn test_escape_mapping() {
        let mut shell = test_shell();
        // On the main menu Escape quits
        assert_eq!(shell.action_for_key(Keycode::Escape), Some(MenuAction::Quit));
        // On the help page it backs out
        shell.handle_action(MenuAction::ShowHelp).unwrap();
        assert_eq!(shell.action_for_key(Keycode::Escape), Some(MenuAction::BackToMenu));
        // Other keys are ignored
        assert_eq!(shell.action_for_key(Keycode::Space), None);
    }

    #[test]
    fn test_click_dispatch() {
        let mut shell = test_shell();
        let config = MenuConfig::default();

        // Click the HELP button (third in the main-menu column)
        let page = PageKind::MainMenu.build(None, &config);
        let help_rect = page.buttons()[2].rect;
        let event = InputEvent::Click(help_rect.x() + 1, help_rect.y() + 1);

        let signal = shell.handle_event(&event).unwrap();
        assert_eq!(signal, ShellSignal::Continue);
        assert_eq!(shell.current_index(), shell.page_index(PageKind::Help).unwrap());
    }

    #[test]
    fn test_click_on_empty_space_does_nothing() {
        let mut shell = test_shell();
        let signal = shell.handle_event(&InputEvent::Click(0, 0)).unwrap();
        assert_eq!(signal, ShellSignal::Continue);
        assert_eq!(shell.current_index(), 0);
        assert!(shell.active_fades().is_empty());
    }

    #[test]
    fn test_window_close_quits() {
        let mut shell = test_shell();
        assert_eq!(shell.handle_event(&InputEvent::Quit).unwrap(), ShellSignal::Quit);
    }
}
