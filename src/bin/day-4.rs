use anyhow::Context;
use aoc2024::{Args, Grid};
use clap::Parser;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::instrument;

fn main() -> anyhow::Result<()> {
    aoc2024::init_tracing()?;
    let args = Args::parse();
    let grid = get_input(&args)?;
    tracing::debug!(rows = grid.rows(), columns = grid.columns());
    tracing::info!(part_1 = part_1(&grid));
    tracing::info!(part_2 = part_2(&grid));
    Ok(())
}

fn get_input(args: &Args) -> anyhow::Result<Grid<char>> {
    let input = aoc2024::read_input(&args.input)?;
    input
        .parse()
        .with_context(|| format!("Malformed grid in {}", args.input.display()))
}

const TARGET_WORD: &str = "XMAS";

/// `(d_row, d_column)` steps, every neighbour of a cell.
type Direction = (isize, isize);

const DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Cells around a pivot, read as top-left, top-right, center, bottom-left,
/// bottom-right.
type CrossPattern = [char; 5];

const CROSS_OFFSETS: [Direction; 5] = [(-1, -1), (-1, 1), (0, 0), (1, -1), (1, 1)];

/// "MAS" written along both diagonals through an 'A', in either sense.
const MAS_CROSS: [CrossPattern; 4] = [
    ['M', 'M', 'A', 'S', 'S'],
    ['S', 'S', 'A', 'M', 'M'],
    ['M', 'S', 'A', 'M', 'S'],
    ['S', 'M', 'A', 'S', 'M'],
];

fn part_1(grid: &Grid<char>) -> usize {
    count_linear_occurrences(grid, TARGET_WORD)
}

fn part_2(grid: &Grid<char>) -> usize {
    count_cross_occurrences(grid, &MAS_CROSS)
}

/// Counts every placement of `word` along a straight line in any of the
/// eight directions. Each start cell and direction is a separate
/// placement, so a palindrome is found once per sense.
#[instrument(level = "debug", skip(grid), ret)]
fn count_linear_occurrences(grid: &Grid<char>, word: &str) -> usize {
    let word: Vec<char> = word.chars().collect();
    let Some(&first) = word.first() else {
        return 0;
    };
    (0..grid.rows())
        .into_par_iter()
        .map(|row| {
            (0..grid.columns())
                .filter(|&column| grid[(row, column)] == first)
                .map(|column| occurrences_from(grid, (row, column), &word))
                .sum::<usize>()
        })
        .sum()
}

fn occurrences_from(grid: &Grid<char>, start: (usize, usize), word: &[char]) -> usize {
    // a single letter has no direction
    if let [_] = word {
        return 1;
    }
    DIRECTIONS
        .iter()
        .filter(|direction| matches_along(grid, start, **direction, word))
        .count()
}

fn matches_along(
    grid: &Grid<char>,
    start: (usize, usize),
    (d_row, d_column): Direction,
    word: &[char],
) -> bool {
    word.iter().enumerate().all(|(i, c)| {
        let i = i as isize;
        grid.get_offset(start, (d_row * i, d_column * i)) == Some(c)
    })
}

/// Counts interior cells whose diagonal cross reads as one of `patterns`.
#[instrument(level = "debug", skip_all, ret)]
fn count_cross_occurrences(grid: &Grid<char>, patterns: &[CrossPattern]) -> usize {
    if grid.rows() < 3 || grid.columns() < 3 {
        return 0;
    }
    (1..grid.rows() - 1)
        .into_par_iter()
        .map(|row| {
            (1..grid.columns() - 1)
                .filter(|&column| {
                    let pivot = grid[(row, column)];
                    patterns.iter().any(|pattern| pattern[2] == pivot)
                })
                .filter_map(|column| cross_at(grid, (row, column)))
                .filter(|cross| patterns.contains(cross))
                .count()
        })
        .sum()
}

fn cross_at(grid: &Grid<char>, pivot: (usize, usize)) -> Option<CrossPattern> {
    let mut cross = ['.'; 5];
    for (cell, offset) in cross.iter_mut().zip(CROSS_OFFSETS) {
        *cell = *grid.get_offset(pivot, offset)?;
    }
    Some(cross)
}
