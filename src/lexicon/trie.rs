//! Prefix trie answering charset and pattern queries.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::puzzle::BLANK;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
    /// Length of the shortest word completing this node, relative to it.
    shortest: usize,
}

impl TrieNode {
    fn add_sequence(&mut self, chars: &[char]) {
        self.shortest = if self.children.is_empty() && !self.terminal {
            chars.len()
        } else {
            self.shortest.min(chars.len())
        };
        match chars.split_first() {
            Some((c, rest)) => self.children.entry(*c).or_default().add_sequence(rest),
            None => self.terminal = true,
        }
    }

    fn matches(&self, pattern: &[char], depth: usize, max_len: usize) -> bool {
        if depth > max_len {
            return false;
        }
        match pattern.split_first() {
            None => self.terminal,
            Some(('%', rest)) => {
                self.matches(rest, depth, max_len)
                    || self
                        .children
                        .values()
                        .any(|child| child.matches(pattern, depth + 1, max_len))
            }
            Some(('_', rest)) => self
                .children
                .values()
                .any(|child| child.matches(rest, depth + 1, max_len)),
            Some((c, rest)) => self
                .children
                .get(c)
                .is_some_and(|child| child.matches(rest, depth + 1, max_len)),
        }
    }

    fn display_helper(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for (c, child) in &self.children {
            write!(f, "{}{}", "\t".repeat(depth), c)?;
            if child.terminal {
                write!(f, "'")?;
            }
            writeln!(f)?;
            child.display_helper(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Trie over lower-case dictionary words.
#[derive(Debug, Clone, Default)]
pub(crate) struct Trie {
    root: TrieNode,
}

impl Trie {
    pub(crate) fn build<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut trie = Self::default();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    pub(crate) fn insert(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        self.root.add_sequence(&chars);
    }

    fn node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Returns true if some word matches `pattern` with at most `max_len` letters.
    pub(crate) fn matches(&self, pattern: &str, max_len: Option<usize>) -> bool {
        let pattern: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();
        self.root.matches(&pattern, 0, max_len.unwrap_or(usize::MAX))
    }

    /// Characters that can follow `prefix` within `remaining_space` cells; the
    /// blank is included when `prefix` is empty or a complete word.
    pub(crate) fn charset(&self, prefix: &str, remaining_space: usize) -> BTreeSet<char> {
        let Some(node) = self.node(prefix) else {
            return BTreeSet::new();
        };

        let mut charset: BTreeSet<char> = node
            .children
            .iter()
            .filter(|(_, child)| 1 + child.shortest <= remaining_space)
            .map(|(c, _)| *c)
            .collect();
        if prefix.is_empty() || node.terminal {
            charset.insert(BLANK);
        }
        charset
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.display_helper(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::Trie;

    fn sample() -> Trie {
        Trie::build(["bass", "bats", "bess", "be"])
    }

    #[test]
    fn exact_pattern_needs_whole_word() {
        let trie = sample();
        assert!(trie.matches("bass", None));
        assert!(trie.matches("be", None));
        assert!(!trie.matches("bat", None));
        assert!(!trie.matches("b", None));
    }

    #[test]
    fn charset_respects_remaining_space() {
        let trie = sample();
        let chars: String = trie.charset("b", 3).into_iter().collect();
        assert_eq!(chars, "ae");
        // only "be" fits in one more cell
        let chars: String = trie.charset("b", 1).into_iter().collect();
        assert_eq!(chars, "e");
    }

    #[test]
    fn charset_allows_blank_after_word_and_at_start() {
        let trie = sample();
        assert!(trie.charset("be", 0).contains(&'_'));
        assert!(trie.charset("be", 2).contains(&'s'));
        assert!(trie.charset("", 0).contains(&'_'));
        assert!(!trie.charset("ba", 2).contains(&'_'));
    }

    #[test]
    fn unknown_prefix_has_empty_charset() {
        assert!(sample().charset("zz", 3).is_empty());
    }

    #[test]
    fn pattern_matching_honours_wildcards_and_length() {
        let trie = sample();
        assert!(trie.matches("b_ss", None));
        assert!(trie.matches("b%", Some(2)));
        assert!(!trie.matches("ba%", Some(3)));
        assert!(!trie.matches("c%", None));
    }

    #[test]
    fn display_works() {
        println!("{}", sample());
    }
}
