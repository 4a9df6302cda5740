//! Plain-text table layout shared by the console reports.

use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;

const COLUMN_GAP: &str = "  ";

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A column heading together with how its cells are aligned.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn left(title: &'static str) -> Self {
        Self { title, align: Align::Left }
    }

    pub const fn right(title: &'static str) -> Self {
        Self { title, align: Align::Right }
    }
}

/// Write an aligned table with a header, a rule, the body rows, and an optional footer row.
///
/// Every row must have as many cells as there are columns. The header and footer are
/// emphasized when `use_colors` is set.
pub fn write_table<W: Write>(
    columns: &[Column],
    rows: &[Vec<String>],
    footer: Option<&[String]>,
    use_colors: bool,
    writer: &mut W,
) -> Result<()> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.title.chars().count()).collect();
    for row in rows.iter().map(Vec::as_slice).chain(footer) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let titles: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();
    write_line(columns, &widths, &titles, use_colors, writer)?;

    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    writeln!(writer, "{}", "─".repeat(rule_width))?;

    for row in rows {
        write_line(columns, &widths, row, false, writer)?;
    }

    if let Some(footer) = footer {
        writeln!(writer, "{}", "─".repeat(rule_width))?;
        write_line(columns, &widths, footer, use_colors, writer)?;
    }

    Ok(())
}

fn write_line<W: Write>(columns: &[Column], widths: &[usize], cells: &[String], bold: bool, writer: &mut W) -> Result<()> {
    let mut line = String::new();
    for (index, ((column, width), cell)) in columns.iter().zip(widths).zip(cells).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }

        match column.align {
            Align::Left => write!(line, "{cell:<width$}")?,
            Align::Right => write!(line, "{cell:>width$}")?,
        }
    }

    let line = line.trim_end();
    if bold {
        writeln!(writer, "{}", line.bold())?;
    } else {
        writeln!(writer, "{line}")?;
    }

    Ok(())
}
