use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use tracing::*;

use super::{escape_html, HtmlConfig, Render};
use crate::{Cell, Column, GridLike, Row, Tabulation, TabulationError};

/// Accumulates indented markup, one element per line.
pub struct HtmlWriter<'a> {
    out: String,
    config: &'a HtmlConfig,
    depth: usize,
}

impl<'a> HtmlWriter<'a> {
    /// Creates an empty writer at nesting depth zero.
    pub fn new(config: &'a HtmlConfig) -> Self {
        Self {
            out: String::new(),
            config,
            depth: 0,
        }
    }

    /// Returns the configuration markup is written with.
    pub fn config(&self) -> &HtmlConfig {
        self.config
    }

    fn line(&mut self, content: fmt::Arguments<'_>) -> fmt::Result {
        let width = self.depth * self.config.indent;
        write!(self.out, "{:width$}", "", width = width)?;
        self.out.write_fmt(content)?;
        self.out.write_char('\n')
    }

    /// Writes an opening tag and nests what follows one level deeper.
    pub fn open(&mut self, tag: &str) -> fmt::Result {
        self.line(format_args!("<{tag}>"))?;
        self.depth += 1;
        Ok(())
    }

    /// Writes the closing tag matching the last [`open`](Self::open).
    pub fn close(&mut self, tag: &str) -> fmt::Result {
        self.depth = self.depth.saturating_sub(1);
        self.line(format_args!("</{tag}>"))
    }

    /// Writes a complete element holding `text`, escaped if configured.
    pub fn element(&mut self, tag: &str, text: &str) -> fmt::Result {
        let text = if self.config.escape {
            Cow::Owned(escape_html(text))
        } else {
            Cow::Borrowed(text)
        };
        self.line(format_args!("<{tag}>{text}</{tag}>"))
    }

    /// Consumes the writer, returning the markup written so far.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders a whole tabulation as an HTML table.
///
/// The table has one header row with an unlabeled header cell per column,
/// and one body row per tabulation row.
pub struct Html;

impl Html {
    /// Renders `tabulation` with the default [`HtmlConfig`].
    ///
    /// # Example
    /// ```
    /// use tabulation::{tabulation, Tabulation, formatter::Html};
    ///
    /// let t: Tabulation<i32> = tabulation![[1, 2], [3, 4]];
    /// let html = Html::render(&t).unwrap();
    /// assert_eq!(html.matches("<th></th>").count(), 2);
    /// assert!(html.contains("<td>1</td>"));
    /// ```
    pub fn render<T: Display>(tabulation: &Tabulation<T>) -> Result<String, TabulationError> {
        Self::render_with_config(tabulation, &HtmlConfig::default())
    }

    /// Renders `tabulation` with a custom [`HtmlConfig`].
    pub fn render_with_config<T: Display>(
        tabulation: &Tabulation<T>,
        config: &HtmlConfig,
    ) -> Result<String, TabulationError> {
        trace!("Rendering tabulation with config: {:?}", config);
        let mut writer = HtmlWriter::new(config);
        tabulation.render(&mut writer)?;
        Ok(writer.finish())
    }
}

/// A `<td>` element; absent cells render the configured placeholder.
impl<T: Display> Render for Cell<T> {
    fn render(&self, writer: &mut HtmlWriter<'_>) -> Result<(), TabulationError> {
        let text = self
            .with_value(|value| value.map(|value| value.to_string()))
            .unwrap_or_else(|| writer.config().empty_placeholder.clone());
        writer.element("td", &text)?;
        Ok(())
    }
}

/// An unlabeled `<th>` header cell.
impl<T> Render for Column<T> {
    fn render(&self, writer: &mut HtmlWriter<'_>) -> Result<(), TabulationError> {
        writer.element("th", "")?;
        Ok(())
    }
}

/// A `<tr>` element with one `<td>` per column.
impl<T: Display> Render for Row<T> {
    fn render(&self, writer: &mut HtmlWriter<'_>) -> Result<(), TabulationError> {
        writer.open("tr")?;
        for cell in &self.columns() {
            cell.render(writer)?;
        }
        writer.close("tr")?;
        Ok(())
    }
}

/// The whole `<table>`: a header row, then a body row per table row.
impl<T: Display> Render for Tabulation<T> {
    fn render(&self, writer: &mut HtmlWriter<'_>) -> Result<(), TabulationError> {
        debug!(
            "Rendering {} rows and {} columns",
            self.rows_count(),
            self.columns_count()
        );
        writer.open("table")?;

        writer.open("thead")?;
        writer.open("tr")?;
        for column in &self.columns() {
            column.render(writer)?;
        }
        writer.close("tr")?;
        writer.close("thead")?;

        writer.open("tbody")?;
        for row in &self.rows() {
            row.render(writer)?;
        }
        writer.close("tbody")?;

        writer.close("table")?;
        Ok(())
    }
}
