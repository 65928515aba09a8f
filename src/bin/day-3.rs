use anyhow::Context;
use aoc2024::{input::number, Args};
use clap::Parser;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    sequence::{delimited, separated_pair},
    IResult,
};

fn main() -> anyhow::Result<()> {
    aoc2024::init_tracing()?;
    let args = Args::parse();
    let input = aoc2024::read_input(&args.input)?;
    let tokens = tokenize(&input);
    tracing::debug!(tokens = tokens.len());
    tracing::info!(part_1 = part_1(&tokens)?);
    tracing::info!(part_2 = part_2(&tokens)?);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Do,
    Dont,
    Mul(u32, u32),
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        map(
            delimited(
                tag("mul("),
                separated_pair(number, tag(","), number),
                tag(")"),
            ),
            |(a, b)| Token::Mul(a, b),
        ),
        value(Token::Do, tag("do()")),
        value(Token::Dont, tag("don't()")),
    ))(input)
}

/// Picks every instruction out of the corrupted memory, skipping one
/// character at a time over anything that does not parse.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        match token(rest) {
            Ok((remaining, token)) => {
                tokens.push(token);
                rest = remaining;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    tokens
}

/// Products of two `u32` operands always fit a `u64`; only the running
/// total can overflow.
fn add_product(sum: u64, a: u32, b: u32) -> anyhow::Result<u64> {
    sum.checked_add(u64::from(a) * u64::from(b))
        .with_context(|| format!("sum overflows at mul({a},{b})"))
}

fn part_1(tokens: &[Token]) -> anyhow::Result<u64> {
    tokens.iter().try_fold(0, |sum, token| match token {
        Token::Mul(a, b) => add_product(sum, *a, *b),
        Token::Do | Token::Dont => Ok(sum),
    })
}

fn part_2(tokens: &[Token]) -> anyhow::Result<u64> {
    let (_, sum) = tokens
        .iter()
        .try_fold(
            (true, 0),
            |(enabled, sum), token| -> anyhow::Result<(bool, u64)> {
                match token {
                    Token::Do => Ok((true, sum)),
                    Token::Dont => Ok((false, sum)),
                    Token::Mul(a, b) if enabled => Ok((enabled, add_product(sum, *a, *b)?)),
                    Token::Mul(_, _) => Ok((enabled, sum)),
                }
            },
        )?;
    Ok(sum)
}
