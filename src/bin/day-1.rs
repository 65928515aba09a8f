use std::collections::HashMap;

use anyhow::Context;
use aoc2024::{input::signed_number, Args};
use clap::Parser;
use nom::{character::complete::space1, sequence::separated_pair, IResult};

pub fn main() -> anyhow::Result<()> {
    aoc2024::init_tracing()?;
    let args = Args::parse();
    tracing::info!(input = %args.input.display(), "Processing file");
    let input = aoc2024::read_input(&args.input)?;
    let (left, right) = parse_lists(&input)?;
    tracing::info!(part_1 = part_1(&left, &right));
    tracing::info!(part_2 = part_2(&left, &right)?);
    Ok(())
}

fn parse_line(line: &str) -> IResult<&str, (i32, i32)> {
    separated_pair(signed_number, space1, signed_number)(line)
}

fn parse_lists(input: &str) -> anyhow::Result<(Vec<i32>, Vec<i32>)> {
    input
        .lines()
        .enumerate()
        .filter(|(index, line)| {
            let empty = line.trim().is_empty();
            if empty {
                tracing::debug!(line = index + 1, "Skip processing of empty line");
            }
            !empty
        })
        .map(|(index, line)| {
            aoc2024::input::parse_complete(parse_line, line.trim_end())
                .with_context(|| format!("unable to find 2 numbers at line #{}", index + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(|pairs| pairs.into_iter().unzip())
}

fn part_1(left: &[i32], right: &[i32]) -> u64 {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(right.iter())
        .map(|(a, b)| u64::from(a.abs_diff(*b)))
        .sum()
}

fn part_2(left: &[i32], right: &[i32]) -> anyhow::Result<i64> {
    let counts: HashMap<i32, i64> = right.iter().fold(HashMap::new(), |mut acc, el| {
        *acc.entry(*el).or_default() += 1;
        acc
    });
    left.iter().try_fold(0i64, |sum, a| {
        let count = counts.get(a).copied().unwrap_or_default();
        count
            .checked_mul(i64::from(*a))
            .and_then(|score| sum.checked_add(score))
            .context("similarity score overflows")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn parses_both_columns() {
        let (left, right) = parse_lists(SAMPLE).unwrap();
        assert_eq!(left, vec![3, 4, 2, 1, 3, 3]);
        assert_eq!(right, vec![4, 3, 5, 3, 9, 3]);
    }

    #[test]
    fn sample_part_1() {
        let (left, right) = parse_lists(SAMPLE).unwrap();
        assert_eq!(part_1(&left, &right), 11);
    }

    #[test]
    fn sample_part_2() {
        let (left, right) = parse_lists(SAMPLE).unwrap();
        assert_eq!(part_2(&left, &right).unwrap(), 31);
    }

    #[test]
    fn skips_empty_lines() {
        let (left, right) = parse_lists("1 2\n\n3 4\n").unwrap();
        assert_eq!(left, vec![1, 3]);
        assert_eq!(right, vec![2, 4]);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let (left, right) = parse_lists("-2147483648 2147483647\n").unwrap();
        assert_eq!(part_1(&left, &right), 4_294_967_295);
        assert_eq!(part_2(&left, &right).unwrap(), 0);

        let (left, right) =
            parse_lists("-2147483648 -2147483648\n-2147483648 -2147483648\n").unwrap();
        assert_eq!(part_1(&left, &right), 0);
        assert_eq!(part_2(&left, &right).unwrap(), -8_589_934_592);
    }

    #[test]
    fn number_wider_than_i32_is_rejected() {
        assert!(parse_lists("9223372036854775807 1\n").is_err());
    }

    #[test]
    fn reports_bad_line() {
        let err = parse_lists("1 2\n3\n").unwrap_err();
        assert!(err.to_string().contains("line #2"), "{err}");
        assert!(parse_lists("1 2 3\n").is_err());
    }
}
