use anyhow::{ensure, Context};
use aoc2024::{input::signed_number, Args};
use clap::Parser;
use indicatif::ProgressStyle;
use nom::{character::complete::space1, multi::separated_list1, IResult};
use tracing::{Level, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

fn main() -> anyhow::Result<()> {
    aoc2024::init_tracing()?;
    let args = Args::parse();
    let input = aoc2024::read_input(&args.input)?;
    let reports = parse_reports(&input)?;
    tracing::info!(part_1 = part_1(&reports));
    tracing::info!(part_2 = part_2(&reports)?);
    Ok(())
}

const MIN_LEVELS: usize = 2;
const MAX_STEP: i64 = 3;

fn parse_report(line: &str) -> IResult<&str, Vec<i32>> {
    separated_list1(space1, signed_number)(line)
}

fn parse_reports(input: &str) -> anyhow::Result<Vec<Vec<i32>>> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| -> anyhow::Result<Vec<i32>> {
            let report = aoc2024::input::parse_complete(parse_report, line)
                .with_context(|| format!("unable to parse report at line #{}", index + 1))?;
            ensure!(
                report.len() >= MIN_LEVELS,
                "unable to parse report at line #{}: count of levels less than {}",
                index + 1,
                MIN_LEVELS
            );
            Ok(report)
        })
        .collect()
}

fn step(from: i32, to: i32) -> i64 {
    i64::from(to) - i64::from(from)
}

/// Levels must move in the sense set by the first pair, by 1 to 3 each step.
fn is_safe(report: &[i32]) -> bool {
    let [first, second, ..] = report else {
        tracing::warn!(?report, "report with less than 2 levels, considering unsafe");
        return false;
    };
    let sense = step(*first, *second).signum();
    if sense == 0 {
        return false;
    }
    report
        .windows(2)
        .map(|pair| step(pair[0], pair[1]) * sense)
        .all(|delta| (1..=MAX_STEP).contains(&delta))
}

fn is_safe_dampened(report: &[i32]) -> bool {
    is_safe(report)
        || (0..report.len()).any(|skip| {
            let report = [&report[..skip], &report[(skip + 1)..]].concat();
            is_safe(&report)
        })
}

fn part_1(reports: &[Vec<i32>]) -> usize {
    reports.iter().filter(|report| is_safe(report)).count()
}

fn part_2(reports: &[Vec<i32>]) -> anyhow::Result<usize> {
    let span = tracing::span!(Level::INFO, "dampener");
    span.pb_set_style(&ProgressStyle::default_bar().template("{elapsed} {bar} {pos:>7}/{len:7}")?);
    span.pb_set_length(reports.len() as u64);
    let _span = span.enter();

    let safe = reports
        .iter()
        .inspect(|_| Span::current().pb_inc(1))
        .filter(|report| is_safe_dampened(report))
        .count();
    Ok(safe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn sample_part_1() {
        let reports = parse_reports(SAMPLE).unwrap();
        assert_eq!(part_1(&reports), 2);
    }

    #[test]
    fn sample_part_2() {
        let reports = parse_reports(SAMPLE).unwrap();
        assert_eq!(part_2(&reports).unwrap(), 4);
    }

    #[test]
    fn safety_rules() {
        assert!(is_safe(&[1, 4]));
        assert!(is_safe(&[4, 1]));
        assert!(!is_safe(&[1, 5]));
        assert!(!is_safe(&[3, 3, 4]));
        assert!(!is_safe(&[1, 2, 1]));
        assert!(!is_safe(&[1]));
    }

    #[test]
    fn extreme_levels_do_not_overflow() {
        assert!(!is_safe(&[i32::MIN, i32::MAX]));
        assert!(!is_safe(&[i32::MAX, i32::MIN, i32::MAX]));
        assert!(is_safe(&[i32::MAX - 2, i32::MAX]));
        assert!(!is_safe_dampened(&[i32::MIN, 0, i32::MAX]));
        assert!(parse_reports("9223372036854775807 1\n").is_err());
    }

    #[test]
    fn dampener_can_drop_the_first_level() {
        assert!(!is_safe(&[5, 1, 2, 3]));
        assert!(is_safe_dampened(&[5, 1, 2, 3]));
        assert!(!is_safe_dampened(&[1, 1, 1, 2]));
    }

    #[test]
    fn short_report_is_a_parse_error() {
        let err = parse_reports("1 2 3\n4\n").unwrap_err();
        assert!(err.to_string().contains("line #2"), "{err}");
    }

    #[test]
    fn non_numeric_level_is_a_parse_error() {
        assert!(parse_reports("1 2 x\n").is_err());
    }
}
