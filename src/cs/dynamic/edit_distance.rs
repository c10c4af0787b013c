use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use log::trace;
use ndarray::Array2;

use crate::error::Error;

/// The unit two strings are compared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Unicode scalar values, as yielded by [`str::chars`].
    #[default]
    Chars,
    /// Raw UTF-8 bytes.
    Bytes,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Chars => f.write_str("chars"),
            Unit::Bytes => f.write_str("bytes"),
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" => Ok(Unit::Chars),
            "bytes" => Ok(Unit::Bytes),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

/// Computes the Levenshtein distance between two string slices, comparing
/// Unicode scalar values.
///
/// # Examples
///
/// ```
/// use editdist::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", ""), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("gumbo", "gambol"), 2);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let mut row = Vec::new();
    let mut chars = Vec::new();
    str_distance(a, b, &mut row, &mut chars)
}

/// Computes the Levenshtein distance between two byte slices.
///
/// Multi-byte UTF-8 sequences count as several units, so the result can
/// differ from [`levenshtein_distance`] on non-ASCII text.
///
/// ```
/// use editdist::levenshtein_distance_bytes;
///
/// assert_eq!(levenshtein_distance_bytes(b"flaw", b"lawn"), 2);
/// assert_eq!(levenshtein_distance_bytes("café".as_bytes(), b"cafe"), 2);
/// ```
pub fn levenshtein_distance_bytes(a: &[u8], b: &[u8]) -> usize {
    levenshtein(a, b)
}

/// Computes the Levenshtein distance between two strings in the given [`Unit`].
pub fn levenshtein_distance_with(a: &str, b: &str, unit: Unit) -> usize {
    match unit {
        Unit::Chars => levenshtein_distance(a, b),
        Unit::Bytes => levenshtein_distance_bytes(a.as_bytes(), b.as_bytes()),
    }
}

/// Computes the Levenshtein distance between two slices of any element type.
///
/// Elements are only compared for equality.
///
/// ```
/// use editdist::levenshtein;
///
/// let a = ["the", "quick", "brown", "fox"];
/// let b = ["the", "slow", "brown", "dog", "barks"];
/// assert_eq!(levenshtein(&a, &b), 3);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut row = Vec::new();
    slice_distance(a, b, &mut row)
}

/// Builds the full `(n + 1) x (m + 1)` distance matrix for `a` and `b`.
///
/// Cell `[i, j]` holds the distance between the first `i` elements of `a` and
/// the first `j` elements of `b`; the bottom-right cell is the overall
/// distance. Uses `O(n * m)` heap memory, so prefer [`levenshtein`] when only
/// the final value is needed.
///
/// ```
/// use editdist::cs::dynamic::edit_distance::distance_matrix;
///
/// let d = distance_matrix(b"flaw", b"lawn");
/// assert_eq!(d.dim(), (5, 5));
/// assert_eq!(d[[4, 4]], 2);
/// ```
pub fn distance_matrix<T: PartialEq>(a: &[T], b: &[T]) -> Array2<usize> {
    let (n, m) = (a.len(), b.len());
    let mut d = Array2::zeros((n + 1, m + 1));

    for i in 0..=n {
        d[[i, 0]] = i;
    }
    for j in 0..=m {
        d[[0, j]] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[[i, j]] = (d[[i - 1, j]] + 1)
                .min(d[[i, j - 1]] + 1)
                .min(d[[i - 1, j - 1]] + cost);
        }
    }

    d
}

/// A reusable edit distance calculator.
///
/// Keeps its working row between calls so repeated comparisons do not
/// reallocate. Results never depend on earlier calls.
///
/// ```
/// use editdist::{EditDistance, Unit};
///
/// let mut calc = EditDistance::with_unit(Unit::Bytes);
/// assert_eq!(calc.distance("café", "cafe"), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditDistance {
    unit: Unit,
    row: Vec<usize>,
    chars: Vec<char>,
}

impl EditDistance {
    /// Creates a calculator comparing Unicode scalar values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator comparing strings in `unit`.
    pub fn with_unit(unit: Unit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Distance between two strings in this calculator's [`Unit`].
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        trace!(
            "edit distance over {}: {} and {} bytes",
            self.unit,
            a.len(),
            b.len()
        );
        match self.unit {
            Unit::Chars => str_distance(a, b, &mut self.row, &mut self.chars),
            Unit::Bytes => slice_distance(a.as_bytes(), b.as_bytes(), &mut self.row),
        }
    }

    /// Distance between two arbitrary slices; the [`Unit`] does not apply.
    pub fn distance_slices<T: PartialEq>(&mut self, a: &[T], b: &[T]) -> usize {
        slice_distance(a, b, &mut self.row)
    }
}

fn slice_distance<T: PartialEq>(a: &[T], b: &[T], row: &mut Vec<usize>) -> usize {
    if a.is_empty() {
        return b.len();
    } else if b.is_empty() {
        return a.len();
    }

    if a.len() <= b.len() {
        rolling_distance(a, b, row)
    } else {
        rolling_distance(b, a, row)
    }
}

fn str_distance(a: &str, b: &str, row: &mut Vec<usize>, chars: &mut Vec<char>) -> usize {
    if a == b {
        return 0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 {
        return b_len;
    } else if b_len == 0 {
        return a_len;
    }

    // Only the shorter side is collected; the longer one is streamed.
    let (short, long) = if a_len <= b_len { (a, b) } else { (b, a) };
    chars.clear();
    chars.extend(short.chars());
    rolling_distance(chars.as_slice(), long.chars(), row)
}

/// Single-row dynamic programming pass.
///
/// Before processing long element `i`, `row[j]` holds `D[i][j]`; cells are
/// overwritten left to right with `D[i + 1][j]`, and `diag` carries the
/// `D[i][j]` value the overwrite destroys.
fn rolling_distance<T, I>(short: &[T], long: I, row: &mut Vec<usize>) -> usize
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    row.clear();
    row.extend(0..=short.len());

    for (i, lc) in long.into_iter().enumerate() {
        let lc: &T = lc.borrow();
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(sc != lc);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diag + cost);
            diag = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[short.len()]
}
