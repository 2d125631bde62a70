// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use super::NodeId;
use std::collections::HashMap;

/// One trie node: outgoing edges keyed by symbol, plus the end-of-word flag.
#[derive(Debug, Clone, Default)]
pub(super) struct Node {
    pub(super) children: HashMap<char, NodeId>,
    pub(super) terminal: bool,
}
