//! Page Stack (Page Container)
//!
//! An ordered collection of full-screen pages plus a single current
//! index: the entire navigational state of the shell. "Show page N" is
//! the only navigation primitive. Out-of-range indices return a typed
//! error rather than being silently ignored.

use crate::error::MenuError;
use crate::page::Page;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Holds all pages and tracks which one is visible
///
/// Invariant: `current` is always a valid index once at least one page
/// has been added. Only [`PageStack::show`] mutates it.
pub struct PageStack<'a> {
    pages: Vec<Page<'a>>,
    current: usize,
}

impl<'a> PageStack<'a> {
    pub fn new() -> Self {
        PageStack {
            pages: Vec::new(),
            current: 0,
        }
    }

    /// Appends a page and returns its assigned index
    pub fn add_page(&mut self, page: Page<'a>) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Makes exactly the page at `index` visible
    ///
    /// Fails with `InvalidPageIndex` if out of range; the current page is
    /// left unchanged in that case.
    pub fn show(&mut self, index: usize) -> Result<(), MenuError> {
        if index >= self.pages.len() {
            return Err(MenuError::InvalidPageIndex {
                index,
                page_count: self.pages.len(),
            });
        }

        self.current = index;
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True only for the single currently shown page
    pub fn is_visible(&self, index: usize) -> bool {
        index == self.current && index < self.pages.len()
    }

    pub fn current_page(&self) -> Option<&Page<'a>> {
        self.pages.get(self.current)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page<'a>> {
        self.pages.get_mut(self.current)
    }

    /// Renders only the current page (all others are hidden)
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if let Some(page) = self.current_page() {
            page.render(canvas)?;
        }
        Ok(())
    }
}

impl<'a> Default for PageStack<'a> {
    fn default() -> Self {
        Self::new()
    }
}
