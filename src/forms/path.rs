//! Form field path parsing
//!
//! Field names like `skills.communicative` or `items[0][name]` address a
//! location inside a nested tree. A path is split into segments by taking
//! every maximal run of characters that are not `.`, `[` or `]`.

const DELIMITERS: [char; 3] = ['.', '[', ']'];

/// Largest segment value treated as an array index
pub const MAX_INDEX: usize = 9_999;

/// Split a dot/bracket path into its segments.
///
/// Empty runs are dropped, so `"a..b"`, `"a[]b"` and `"a.b"` all yield
/// `["a", "b"]`, and a path made only of delimiters yields no segments.
pub fn parse_path(path: &str) -> Vec<String> {
    path.split(DELIMITERS)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a segment addresses an array slot.
///
/// Only plain ASCII digit strings no larger than [`MAX_INDEX`] qualify:
/// `"-1"`, `"1.5"`, `"1e3"`, `" 2"` and `"100000000"` do not.
pub fn is_index(segment: &str) -> bool {
    parse_index(segment).is_some()
}

/// Parse a segment as an array index, see [`is_index`].
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| *index <= MAX_INDEX)
}

/// Anything that can name a location in a form tree.
///
/// Strings are parsed with [`parse_path`]; sequences are taken as already
/// split and used verbatim.
pub trait PathSpec {
    fn segments(&self) -> Vec<String>;
}

impl PathSpec for str {
    fn segments(&self) -> Vec<String> {
        parse_path(self)
    }
}

impl PathSpec for String {
    fn segments(&self) -> Vec<String> {
        parse_path(self)
    }
}

impl<S: AsRef<str>> PathSpec for [S] {
    fn segments(&self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> PathSpec for [S; N] {
    fn segments(&self) -> Vec<String> {
        self.as_slice().segments()
    }
}

impl<S: AsRef<str>> PathSpec for Vec<S> {
    fn segments(&self) -> Vec<String> {
        self.as_slice().segments()
    }
}

impl<T: PathSpec + ?Sized> PathSpec for &T {
    fn segments(&self) -> Vec<String> {
        (**self).segments()
    }
}
