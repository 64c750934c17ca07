use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tabulation::formatter::{Formatter, HtmlConfig};
use tabulation::{GridLike, Tabulation};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Render delimited text as an HTML table.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file; reads standard input when omitted
    input: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Spaces per nesting level in the output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Keep HTML special characters in cell text as they are
    #[arg(long)]
    no_escape: bool,

    /// Push every input line as a column instead of a row
    #[arg(long)]
    transpose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!("Parsed arguments: {:?}", args);

    let text = read_input(args.input.as_deref())?;
    let table = build_table(&text, args.delimiter, args.transpose);
    info!(
        "Built table with {} rows and {} columns",
        table.rows_count(),
        table.columns_count()
    );

    let config = HtmlConfig {
        indent: args.indent,
        escape: !args.no_escape,
        ..HtmlConfig::default()
    };
    let html = Formatter::new(&table)
        .to_html_with_config(&config)
        .context("Failed to render table")?;
    print!("{html}");

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Splits a line into trimmed fields; empty fields become absent cells.
fn parse_fields(line: &str, delimiter: char) -> Vec<Option<String>> {
    line.split(delimiter)
        .map(|field| {
            let field = field.trim();
            (!field.is_empty()).then(|| field.to_string())
        })
        .collect()
}

fn build_table(text: &str, delimiter: char, transpose: bool) -> Tabulation<String> {
    let table = Tabulation::default();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let fields = parse_fields(line, delimiter);
        if transpose {
            table.columns().push(fields);
        } else {
            table.rows().push(fields);
        }
    }
    table
}

/// Unit tests for the command line glue.
#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a,b,c", ',' => vec![Some("a".to_string()), Some("b".to_string()), Some("c".to_string())]; "plain")]
    #[test_case("a,,c", ',' => vec![Some("a".to_string()), None, Some("c".to_string())]; "empty field")]
    #[test_case(" a ; b ", ';' => vec![Some("a".to_string()), Some("b".to_string())]; "custom delimiter")]
    fn test_parse_fields(line: &str, delimiter: char) -> Vec<Option<String>> {
        parse_fields(line, delimiter)
    }

    #[test]
    fn test_build_table_rows() {
        let table = build_table("1,2\n\n3\n", ',', false);
        assert_eq!((table.rows_count(), table.columns_count()), (2, 2));
        assert_eq!(table.cell(1, 0).value(), Some("3".to_string()));
        assert_eq!(table.cell(1, 1).value(), None);
    }

    #[test]
    fn test_build_table_transposed() {
        let table = build_table("1,2\n3\n", ',', true);
        assert_eq!((table.rows_count(), table.columns_count()), (2, 2));
        assert_eq!(table.cell(1, 0).value(), Some("2".to_string()));
        assert_eq!(table.cell(0, 1).value(), Some("3".to_string()));
    }

    #[test]
    fn test_rendered_output() {
        let table = build_table("x,<y>", ',', false);
        let html = Formatter::new(&table).to_html().unwrap();
        assert!(html.contains("<td>x</td>"));
        assert!(html.contains("<td>&lt;y&gt;</td>"));
    }
}
