// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

/// How the depth-first search keeps its backtracking state.
///
/// Both strategies visit cells in the same order and return the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Plain recursion; stack depth grows with word length.
    Recursive,
    /// Heap-allocated frame stack; safe for very long words.
    #[default]
    ExplicitStack,
}

/// Options for [`GridSearcher`](crate::engine::GridSearcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_explicit_stack() {
        assert_eq!(SearchConfig::new().strategy, SearchStrategy::ExplicitStack);
    }

    #[test]
    fn test_with_strategy() {
        let config = SearchConfig::new().with_strategy(SearchStrategy::Recursive);
        assert_eq!(config.strategy, SearchStrategy::Recursive);
    }
}
