// Fuzzy matching of filter terms against article text

/// Scores above this value count as a match.
pub const MATCH_THRESHOLD: u8 = 90;

/// Text lowercased once and split into chars, ready to be compared many times.
#[derive(Debug, Clone)]
pub struct MatchText(Vec<char>);

impl MatchText {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase().chars().collect())
    }
}

/// Partial-ratio scorer. Holds the LCS rows so repeated comparisons do not
/// allocate.
#[derive(Debug, Default)]
pub struct Matcher {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-aligned substring similarity between `query` and `target`, 0..=100.
    ///
    /// The shorter text is slid across every same-length window of the longer
    /// one and each window is scored with the indel ratio
    /// `2 * lcs / (len_a + len_b)`. Empty input scores 0.
    pub fn score(&mut self, query: &MatchText, target: &MatchText) -> u8 {
        let (query, target) = (&query.0, &target.0);
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        let (short, long) = if query.len() <= target.len() {
            (query, target)
        } else {
            (target, query)
        };

        let mut best = 0usize;
        for window in long.windows(short.len()) {
            let common = self.lcs_len(short, window);
            if common > best {
                best = common;
                if best == short.len() {
                    break;
                }
            }
        }

        // Both sides of every comparison have short.len() chars.
        let ratio = best as f64 / short.len() as f64;
        (ratio * 100.0).round() as u8
    }

    pub fn matches(&mut self, query: &MatchText, target: &MatchText) -> bool {
        self.score(query, target) > MATCH_THRESHOLD
    }

    /// Any-match of `query` against each target on its own.
    pub fn matches_any(&mut self, query: &MatchText, targets: &[MatchText]) -> bool {
        targets.iter().any(|target| self.matches(query, target))
    }

    fn lcs_len(&mut self, a: &[char], b: &[char]) -> usize {
        self.prev.clear();
        self.prev.resize(b.len() + 1, 0);
        self.curr.clear();
        self.curr.resize(b.len() + 1, 0);

        for &ca in a {
            for (j, &cb) in b.iter().enumerate() {
                self.curr[j + 1] = if ca == cb {
                    self.prev[j] + 1
                } else {
                    self.curr[j].max(self.prev[j + 1])
                };
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[b.len()]
    }
}
