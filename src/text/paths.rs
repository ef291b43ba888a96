//! Stack-trace path shortening.
//!
//! Examples of tokens that get shortened:
//!
//! ```text
//! /Users/user/dev/repo/demo/calculator/calculator.test.ts:5:26
//! very/long/file/path/should/be/shortened.txt
//! ```
//!
//! Examples of tokens left alone:
//!
//! ```text
//! node:internal/process/task_queues:95:5
//! short/file/path.txt
//! file.txt
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Number of trailing segments kept when a path is shortened.
pub const KEPT_SEGMENTS: usize = 3;

/// Marker standing in for the dropped leading segments.
pub const ELISION: &str = "...";

/// A maximal run of path characters. Whitespace, parentheses and anything
/// else outside the class act as delimiters and are never consumed.
static PATH_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.:/-]+").expect("valid path token regex"));

/// Replace every path token with more than [`KEPT_SEGMENTS`] segments by
/// `.../` followed by its last [`KEPT_SEGMENTS`] segments.
///
/// The result is stable under repeated application: a shortened token has
/// exactly `...` plus three segments and shortens to itself.
pub fn shorten_file_paths(message: &str) -> String {
    PATH_TOKEN
        .replace_all(message, |caps: &Captures| shorten_token(&caps[0]))
        .into_owned()
}

fn shorten_token(token: &str) -> String {
    if !token.contains('/') {
        return token.to_string();
    }

    let mut segments: Vec<&str> = token.split('/').collect();
    if segments.first() == Some(&"") {
        segments.remove(0);
    }

    if segments.len() <= KEPT_SEGMENTS {
        return token.to_string();
    }

    let tail = &segments[segments.len() - KEPT_SEGMENTS..];
    format!("{ELISION}/{}", tail.join("/"))
}
