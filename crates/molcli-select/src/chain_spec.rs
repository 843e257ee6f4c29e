//! Chain id sets
//!
//! Tokens are single characters (`A`) or character ranges (`A-D`).

use std::borrow::Borrow;

use molcli_mol::Chain;

/// Parsed set of chain ids
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainSpec {
    /// Items in the order they were written
    pub items: Vec<ChainItem>,
}

/// One token of a chain spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainItem {
    /// Single chain id
    Single(char),
    /// Inclusive range of chain ids by code point
    Range(char, char),
}

impl ChainItem {
    /// Check if a chain id is selected by this item
    pub fn matches(&self, chain_id: char) -> bool {
        match *self {
            ChainItem::Single(c) => c == chain_id,
            ChainItem::Range(start, end) => start <= chain_id && chain_id <= end,
        }
    }

    fn parse(token: &str) -> Option<ChainItem> {
        match token.split_once('-') {
            Some((start, end)) => Some(ChainItem::Range(single_char(start)?, single_char(end)?)),
            None => single_char(token).map(ChainItem::Single),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl ChainSpec {
    /// Parse a comma-separated chain spec, skipping malformed tokens
    pub fn parse(spec: &str) -> Self {
        let mut items = Vec::new();
        if spec.is_empty() {
            return ChainSpec { items };
        }
        for token in spec.split(',') {
            match ChainItem::parse(token) {
                Some(item) => items.push(item),
                None => log::debug!("Skipping malformed chain spec token {:?}", token),
            }
        }
        ChainSpec { items }
    }

    /// True if nothing can match
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a chain id is selected
    pub fn contains_id(&self, chain_id: char) -> bool {
        self.items.iter().any(|item| item.matches(chain_id))
    }

    /// Check if a chain is selected
    pub fn contains(&self, chain: &Chain) -> bool {
        self.contains_id(chain.chain_id)
    }

    /// Keep the selected chains, preserving input order
    pub fn filter<C>(&self, chains: &[C]) -> Vec<C>
    where
        C: Borrow<Chain> + Clone,
    {
        chains
            .iter()
            .filter(|c| self.contains(<C as Borrow<Chain>>::borrow(*c)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_range() {
        let spec = ChainSpec::parse("A,C-E");
        assert!(spec.contains_id('A'));
        assert!(!spec.contains_id('B'));
        assert!(spec.contains_id('C'));
        assert!(spec.contains_id('D'));
        assert!(spec.contains_id('E'));
        assert!(!spec.contains_id('F'));
    }

    #[test]
    fn test_malformed_tokens_skipped() {
        let spec = ChainSpec::parse("AB,-,C-,B");
        assert_eq!(spec.items, vec![ChainItem::Single('B')]);
    }

    #[test]
    fn test_filter_chain_refs() {
        let a = Chain::new('A');
        let b = Chain::new('B');
        let c = Chain::new('C');
        let chains = vec![&c, &a, &b];
        let picked = ChainSpec::parse("A-B").filter(&chains);
        let ids: Vec<char> = picked.iter().map(|c| c.chain_id).collect();
        assert_eq!(ids, vec!['A', 'B']);
    }

    #[test]
    fn test_empty_matches_nothing() {
        assert!(!ChainSpec::parse("").contains_id('A'));
    }
}
