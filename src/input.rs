use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::Parser;
use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    error::ErrorKind,
    sequence::pair,
    Finish, IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Path to input file
    #[arg(long, default_value = "input.txt")]
    pub input: PathBuf,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("unable to open file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("unable to read file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to parse {input:?} ({kind:?})")]
pub struct ParseError {
    pub input: String,
    pub kind: ErrorKind,
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), bytes = buffer.len(), "read input");
    Ok(buffer)
}

pub fn number<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, str::parse::<T>)(input)
}

pub fn signed_number<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<T>)(input)
}

/// Runs `parser` over the whole of `input`; leftover text is an error.
pub fn parse_complete<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    input: &'a str,
) -> Result<O, ParseError> {
    all_consuming(parser)(input)
        .finish()
        .map(|(_, output)| output)
        .map_err(|e| ParseError {
            input: e.input.to_string(),
            kind: e.code,
        })
}
