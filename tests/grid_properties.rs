//! Property tests for the grid adapter
//!
//! Square grids survive four rotations and two transpositions unchanged, in
//! both character and tab-delimited layouts.

use proptest::prelude::*;
use puzzletext::grid::{apply_grid_transform, rotate, transpose, GridLayout, LineEnding};

/// Square grid of plain characters (no tabs, no line breaks), joined with `newline`.
fn square_char_grid(newline: &'static str) -> impl Strategy<Value = String> {
    (1usize..8).prop_flat_map(move |size| {
        prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 .#]", size), size)
            .prop_map(move |rows| rows.into_iter().map(|row| row.concat()).collect::<Vec<_>>().join(newline))
    })
}

/// Square grid of tab-separated multi-character cells.
fn square_tab_grid() -> impl Strategy<Value = String> {
    (1usize..6).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec("[a-z]{0,4}", size), size)
            .prop_map(|rows| rows.into_iter().map(|row| row.join("\t")).collect::<Vec<_>>().join("\n"))
    })
}

proptest! {
    #[test]
    fn rotate_four_times_is_identity(grid in square_char_grid("\n")) {
        let mut current = grid.clone();
        for _ in 0..4 {
            current = apply_grid_transform(&current, rotate);
        }
        prop_assert_eq!(current, grid);
    }

    #[test]
    fn transpose_twice_is_identity(grid in square_char_grid("\n")) {
        let once = apply_grid_transform(&grid, transpose);
        prop_assert_eq!(apply_grid_transform(&once, transpose), grid);
    }

    #[test]
    fn crlf_grids_stay_crlf(grid in square_char_grid("\r\n")) {
        let rotated = apply_grid_transform(&grid, rotate);
        if grid.contains("\r\n") {
            prop_assert_eq!(GridLayout::detect(&rotated).line_ending, LineEnding::CrLf);
        }
        prop_assert_eq!(apply_grid_transform(&apply_grid_transform(&grid, transpose), transpose), grid);
    }

    #[test]
    fn tab_grids_round_trip(grid in square_tab_grid()) {
        // Single-cell grids have no tab, so they are read as character grids instead.
        prop_assume!(grid.contains('\t'));
        let mut current = grid.clone();
        for _ in 0..4 {
            current = apply_grid_transform(&current, rotate);
        }
        prop_assert_eq!(current, grid.clone());
        prop_assert_eq!(apply_grid_transform(&apply_grid_transform(&grid, transpose), transpose), grid);
    }

    #[test]
    fn transpose_keeps_row_count_as_column_count(grid in square_char_grid("\n")) {
        let rows = grid.split('\n').count();
        let transposed = apply_grid_transform(&grid, transpose);
        prop_assert!(transposed.split('\n').all(|row| row.chars().count() == rows));
    }
}
