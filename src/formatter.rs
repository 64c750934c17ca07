//! This module provides functionality for rendering tabulations as HTML tables.
//!
//! # Examples
//!
//! ```rust
//! use tabulation::{tabulation, Tabulation, formatter::*};
//!
//! let t: Tabulation<&str> = tabulation![["a", "b"], ["c"]];
//!
//! // Configure rendering settings
//! let config = HtmlConfig {
//!     indent: 0,
//!     escape: true,
//!     empty_placeholder: "-".to_string(),
//! };
//!
//! let html = Formatter::new(&t).to_html_with_config(&config).unwrap();
//! assert!(html.contains("<td>-</td>"));
//! ```

pub mod html;

use std::fmt::Display;

use crate::{Tabulation, TabulationError};
pub use html::{Html, HtmlWriter};

/// Configuration for rendering a tabulation.
///
/// # Examples
///
/// ```
/// use tabulation::formatter::HtmlConfig;
///
/// let config = HtmlConfig::default();
/// assert_eq!(config.indent, 2);
/// assert!(config.escape);
/// assert_eq!(config.empty_placeholder, "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlConfig {
    /// Spaces per nesting level (default: 2)
    pub indent: usize,
    /// Escape HTML special characters in cell text (default: true)
    pub escape: bool,
    /// Text rendered for absent cells (default: empty)
    pub empty_placeholder: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig {
            indent: 2,
            escape: true,
            empty_placeholder: String::new(),
        }
    }
}

/// Trait for types that can be rendered as part of an HTML table.
///
/// This trait is implemented for [`Cell`](crate::Cell), [`Row`](crate::Row),
/// [`Column`](crate::Column) and [`Tabulation`].
pub trait Render {
    /// Writes the markup for `self` into `writer`.
    ///
    /// # Errors
    /// Returns [`TabulationError::FormatError`] if writing fails.
    fn render(&self, writer: &mut HtmlWriter<'_>) -> Result<(), TabulationError>;
}

/// Serializes a [`Tabulation`].
pub struct Formatter<'a, T> {
    tabulation: &'a Tabulation<T>,
}

impl<'a, T: Display> Formatter<'a, T> {
    /// Creates a formatter borrowing `tabulation`.
    pub fn new(tabulation: &'a Tabulation<T>) -> Self {
        Self { tabulation }
    }

    /// Renders the tabulation with the default [`HtmlConfig`].
    pub fn to_html(&self) -> Result<String, TabulationError> {
        Html::render(self.tabulation)
    }

    /// Renders the tabulation with a custom [`HtmlConfig`].
    pub fn to_html_with_config(&self, config: &HtmlConfig) -> Result<String, TabulationError> {
        Html::render_with_config(self.tabulation, config)
    }
}

/// Escape HTML entities for safe embedding.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
