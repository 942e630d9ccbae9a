/// The first line of an HTTP request.
///
/// Only the path token is ever used; method and version are carried inside
/// `raw` for logging but never validated.
#[derive(Debug, Clone)]
pub struct RequestLine {
    /// The request line as received, without the trailing line terminator.
    pub raw: String,
    /// The text between the first two spaces of the line.
    pub path: String,
}

impl RequestLine {
    /// Splits a request line into its path token.
    ///
    /// The extraction is deliberately tolerant: the path is whatever sits
    /// between the first space and the following space. A line with one
    /// space yields everything after it, a line with no space yields the
    /// whole line, and an empty line yields an empty path. Nothing is
    /// rejected here; nonsense paths simply fail to resolve later.
    pub fn parse(line: &str) -> Self {
        let after = match line.find(' ') {
            Some(i) => &line[i + 1..],
            None => line,
        };

        let path = match after.find(' ') {
            Some(i) => &after[..i],
            None => after,
        };

        Self {
            raw: line.to_string(),
            path: path.to_string(),
        }
    }
}
