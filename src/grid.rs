//! Grid adapter: lifts geometric grid operations into text transforms
//!
//! Text is read as a grid of cells. The layout is inferred from the text itself:
//!
//! - Cells are tab-delimited fields if the text contains a tab anywhere,
//!   otherwise every character is a cell.
//! - Rows are separated by `\r\n` if the text contains one anywhere,
//!   otherwise by `\n`.
//!
//! The same layout is used to write the transformed grid back out.
//!
//! Ragged grids are not an error: column extraction stops at the shortest row,
//! so cells past it are dropped.

use tracing::debug;

/// Rows of cells.
pub type Grid = Vec<Vec<String>>;

/// A geometric operation on a whole grid.
pub type GridOp = fn(Grid) -> Grid;

/// How cells are separated within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDelimiter {
    /// One cell per character
    Char,
    /// Cells are tab-separated fields
    Tab,
}

impl CellDelimiter {
    /// String placed between cells when serializing a row.
    pub fn separator(self) -> &'static str {
        match self {
            CellDelimiter::Char => "",
            CellDelimiter::Tab => "\t",
        }
    }
}

/// Row terminator used for both splitting and joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Grid shape inferred from input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub delimiter: CellDelimiter,
    pub line_ending: LineEnding,
}

impl GridLayout {
    /// Infer the layout from the text: tab presence picks the delimiter,
    /// CRLF presence picks the line ending.
    pub fn detect(data: &str) -> Self {
        let delimiter = if data.contains('\t') { CellDelimiter::Tab } else { CellDelimiter::Char };
        let line_ending = if data.contains("\r\n") { LineEnding::CrLf } else { LineEnding::Lf };
        Self { delimiter, line_ending }
    }
}

/// Split text into a grid using the given layout.
///
/// Splitting always yields at least one row; empty text is a single empty row.
pub fn parse_grid(data: &str, layout: GridLayout) -> Grid {
    data.split(layout.line_ending.as_str())
        .map(|line| match layout.delimiter {
            CellDelimiter::Tab => line.split('\t').map(String::from).collect(),
            CellDelimiter::Char => line.chars().map(String::from).collect(),
        })
        .collect()
}

/// Join a grid back into text using the given layout.
pub fn render_grid(grid: &[Vec<String>], layout: GridLayout) -> String {
    grid.iter()
        .map(|row| row.join(layout.delimiter.separator()))
        .collect::<Vec<_>>()
        .join(layout.line_ending.as_str())
}

/// Take columns as rows, stopping at the shortest row.
pub fn transpose(grid: Grid) -> Grid {
    let width = grid.iter().map(Vec::len).min().unwrap_or(0);
    let mut rows: Vec<std::vec::IntoIter<String>> = grid.into_iter().map(Vec::into_iter).collect();

    (0..width)
        .map(|_| rows.iter_mut().filter_map(Iterator::next).collect())
        .collect()
}

/// Rotate a quarter turn clockwise: reverse the row order, then take columns as rows.
pub fn rotate(mut grid: Grid) -> Grid {
    grid.reverse();
    transpose(grid)
}

/// Apply a grid operation to text, inferring and preserving its layout.
pub fn apply_grid_transform(data: &str, op: GridOp) -> String {
    let layout = GridLayout::detect(data);
    let grid = parse_grid(data, layout);
    debug!(
        delimiter = ?layout.delimiter,
        line_ending = ?layout.line_ending,
        rows = grid.len(),
        min_cells = grid.iter().map(Vec::len).min().unwrap_or(0),
        max_cells = grid.iter().map(Vec::len).max().unwrap_or(0),
        "applying grid transform"
    );
    render_grid(&op(grid), layout)
}

/// A text transform built from a grid operation.
///
/// Holds only the function pointer, so it is `Copy` and shareable across threads.
#[derive(Clone, Copy)]
pub struct GridTransform {
    op: GridOp,
}

impl GridTransform {
    pub fn apply(&self, data: &str) -> String {
        apply_grid_transform(data, self.op)
    }
}

impl std::fmt::Debug for GridTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridTransform").finish_non_exhaustive()
    }
}

/// Wrap a grid operation as a text-to-text transform.
pub fn make_grid_transform(op: GridOp) -> GridTransform {
    GridTransform { op }
}
