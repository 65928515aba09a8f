use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::{bail, ensure, Context};
use aoc2024::{
    input::{number, parse_complete},
    Args,
};
use clap::Parser;
use nom::{bytes::complete::tag, multi::separated_list1, sequence::separated_pair, IResult};

fn main() -> anyhow::Result<()> {
    aoc2024::init_tracing()?;
    let args = Args::parse();
    let input = aoc2024::read_input(&args.input)?;
    let queue = parse_input(&input)?;
    tracing::debug!(rules = queue.rules.len(), updates = queue.updates.len());
    tracing::info!(part_1 = part_1(&queue));
    tracing::info!(part_2 = part_2(&queue)?);
    Ok(())
}

/// `Rule(a, b)`: page `a` must be printed before page `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule(u32, u32);

fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (rem, (a, b)) = separated_pair(number, tag("|"), number)(input)?;
    Ok((rem, Rule(a, b)))
}

fn parse_update(input: &str) -> IResult<&str, Vec<u32>> {
    separated_list1(tag(","), number)(input)
}

#[derive(Debug)]
struct PrintQueue {
    rules: HashSet<Rule>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn ordered_correctly(&self, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(i, earlier)| {
            update[i + 1..]
                .iter()
                .all(|later| !self.rules.contains(&Rule(*later, *earlier)))
        })
    }

    /// Topological order of the pages in `update`, using only the rules
    /// between those pages. Among pages that are free to go next, the one
    /// appearing first in `update` wins.
    fn reordered(&self, update: &[u32]) -> anyhow::Result<Vec<u32>> {
        let mut first_seen: HashMap<u32, usize> = HashMap::new();
        let mut copies: HashMap<u32, usize> = HashMap::new();
        for (position, page) in update.iter().enumerate() {
            first_seen.entry(*page).or_insert(position);
            *copies.entry(*page).or_default() += 1;
        }

        let mut in_degree: HashMap<u32, usize> =
            first_seen.keys().map(|page| (*page, 0)).collect();
        let mut successors: HashMap<u32, Vec<u32>> = HashMap::new();
        for Rule(a, b) in self
            .rules
            .iter()
            .filter(|Rule(a, b)| first_seen.contains_key(a) && first_seen.contains_key(b))
        {
            successors.entry(*a).or_default().push(*b);
            *in_degree.entry(*b).or_default() += 1;
        }

        let mut ready: BTreeSet<(usize, u32)> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(page, _)| (first_seen[page], *page))
            .collect();
        let mut ordered = Vec::with_capacity(update.len());
        while let Some((_, page)) = ready.pop_first() {
            ordered.extend(std::iter::repeat(page).take(copies[&page]));
            for next in successors.get(&page).into_iter().flatten() {
                let degree = in_degree.entry(*next).or_default();
                *degree -= 1;
                if *degree == 0 {
                    ready.insert((first_seen[next], *next));
                }
            }
        }
        ensure!(
            ordered.len() == update.len(),
            "rules form a cycle among pages {:?}",
            update
        );
        Ok(ordered)
    }
}

fn parse_input(input: &str) -> anyhow::Result<PrintQueue> {
    let Some((rules, updates)) = input.split_once("\n\n") else {
        bail!("unable to parse instructions: no blank line after the rules");
    };
    let rules = rules
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_complete(parse_rule, line)
                .with_context(|| format!("unable to parse rule at line #{}", index + 1))
        })
        .collect::<anyhow::Result<HashSet<_>>>()?;
    let first_update_line = input[..input.len() - updates.len()].lines().count() + 1;
    let updates = updates
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_complete(parse_update, line).with_context(|| {
                format!(
                    "unable to parse print sequence at line #{}",
                    first_update_line + index
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure!(
        !updates.is_empty(),
        "unable to parse instructions: no print sequences"
    );
    Ok(PrintQueue { rules, updates })
}

fn middle(update: &[u32]) -> u64 {
    u64::from(update[update.len() / 2])
}

fn part_1(queue: &PrintQueue) -> u64 {
    queue
        .updates
        .iter()
        .filter(|update| queue.ordered_correctly(update))
        .map(|update| middle(update))
        .sum()
}

fn part_2(queue: &PrintQueue) -> anyhow::Result<u64> {
    queue
        .updates
        .iter()
        .filter(|update| !queue.ordered_correctly(update))
        .map(|update| queue.reordered(update))
        .inspect(|update| tracing::trace!(?update))
        .map(|update| update.map(|update| middle(&update)))
        .sum()
}
