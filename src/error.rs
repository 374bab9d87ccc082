use crate::page::PageKind;
use std::fmt;

/// Errors that can occur during menu-shell operations
#[derive(Debug, Clone)]
pub enum MenuError {
    /// Page index out of bounds for the current stack
    InvalidPageIndex {
        index: usize,
        page_count: usize,
    },

    /// A page kind was requested that was never registered with the shell
    PageNotRegistered(PageKind),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuError::InvalidPageIndex { index, page_count } => {
                write!(f, "Invalid page index: {} (stack has {} pages)", index, page_count)
            }
            MenuError::PageNotRegistered(kind) => {
                write!(f, "Page not registered: {:?}", kind)
            }
        }
    }
}

impl std::error::Error for MenuError {}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_display() {
        let err = MenuError::InvalidPageIndex { index: 5, page_count: 2 };
        assert_eq!(err.to_string(), "Invalid page index: 5 (stack has 2 pages)");
    }

    #[test]
    fn test_not_registered_display() {
        let err = MenuError::PageNotRegistered(PageKind::Help);
        assert_eq!(err.to_string(), "Page not registered: Help");
    }

    #[test]
    fn test_into_string() {
        let err = MenuError::InvalidPageIndex { index: 1, page_count: 0 };
        let s: String = err.into();
        assert!(s.contains("Invalid page index"));
    }
}
