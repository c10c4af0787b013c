use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use editdist::words::WordReader;
use editdist::{EditDistance, Error, Result};
use tracing_subscriber::EnvFilter;

fn prompt_word<R: BufRead, W: Write>(
    words: &mut WordReader<R>,
    out: &mut W,
    label: &str,
    found: usize,
) -> Result<String> {
    writeln!(out, "Please input the {label} word: ")?;
    out.flush()?;
    words
        .next_word()?
        .ok_or(Error::MissingWord { expected: 2, found })
}

fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<usize> {
    let mut words = WordReader::new(input);
    let first = prompt_word(&mut words, out, "first", 0)?;
    let second = prompt_word(&mut words, out, "second", 1)?;

    let distance = EditDistance::new().distance(&first, &second);
    writeln!(out, "The edit distance is: {distance}")?;
    Ok(distance)
}

fn report<W: Write>(err: &Error, out: &mut W) -> ExitCode {
    // stderr may already be closed.
    let _ = writeln!(out, "error: {err}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run(stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => report(&e, &mut io::stderr()),
    }
}
