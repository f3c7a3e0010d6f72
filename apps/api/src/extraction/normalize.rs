/// Two views of the same extracted text.
///
/// `lines` keeps the original line structure for positional heuristics (name detection);
/// `clean` is a single whitespace-collapsed string for content pattern search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub lines: Vec<String>,
    pub clean: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let lines = raw.split('\n').map(|l| l.trim().to_string()).collect();
        let clean = raw
            .split(|c: char| c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self { lines, clean }
    }

    /// The first `n` lines with content, in document order.
    pub fn leading_non_empty(&self, n: usize) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| !l.is_empty())
            .take(n)
    }

    pub fn is_empty(&self) -> bool {
        self.clean.is_empty()
    }
}
