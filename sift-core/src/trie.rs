//! Character-keyed prefix tree over the vocabulary.
//!
//! All nodes live in one `Vec` and refer to their children by index, so the
//! tree is a single allocation that grows by appending. Nodes are never
//! removed: once a token is stored it stays stored.
//!
//! ```text
//! insert("car"), insert("card"), insert("cat")
//!
//! nodes[0] root ──c──> [1] ──a──> [2] ──r──> [3]* ──d──> [4]*
//!                                     └──t──> [5]*
//! (* = terminal)
//! ```
//!
//! Children are kept sorted by character, which makes child lookup a binary
//! search and makes a depth-first walk emit words in lexicographic order.

use sift_types::DocId;
use smallvec::SmallVec;

/// Index of a node in the trie arena.
pub type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child edges sorted by character
    children: SmallVec<[(char, NodeId); 4]>,
    /// The path from the root spells a stored token
    terminal: bool,
    /// Documents containing the token (inverted index only), ascending
    postings: Vec<DocId>,
}

/// Prefix tree storing a set of tokens.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    terminals: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a trie holding only the root (empty prefix).
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            terminals: 0,
        }
    }

    /// Number of stored tokens.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terminals
    }

    /// Returns `true` if no token has been stored.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Number of nodes including the root.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every token and posting.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::default());
        self.terminals = 0;
    }

    #[inline(always)]
    fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        let children = &self.nodes[node as usize].children;
        children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| children[i].1)
    }

    /// Stores `token` and returns its terminal node.
    ///
    /// Inserting a token that is already stored changes nothing and returns
    /// the same node. The empty string marks the root terminal.
    pub fn insert(&mut self, token: &str) -> NodeId {
        let mut node = ROOT;
        for ch in token.chars() {
            let slot = self.nodes[node as usize]
                .children
                .binary_search_by_key(&ch, |&(c, _)| c);
            node = match slot {
                Ok(i) => self.nodes[node as usize].children[i].1,
                Err(i) => {
                    debug_assert!(self.nodes.len() < NodeId::MAX as usize);
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(i, (ch, id));
                    id
                }
            };
        }

        let terminal = &mut self.nodes[node as usize].terminal;
        if !*terminal {
            *terminal = true;
            self.terminals += 1;
        }
        node
    }

    /// Follows `path` from the root, whether or not it ends at a stored token.
    fn walk(&self, path: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for ch in path.chars() {
            node = self.child(node, ch)?;
        }
        Some(node)
    }

    /// Returns the terminal node for `token` if it is stored.
    pub fn node(&self, token: &str) -> Option<NodeId> {
        self.walk(token)
            .filter(|&node| self.nodes[node as usize].terminal)
    }

    /// Returns `true` if `token` was inserted.
    ///
    /// A prefix of a stored token is not contained unless it was inserted
    /// itself.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.node(token).is_some()
    }

    /// Returns every stored token starting with `prefix`, sorted.
    ///
    /// The prefix itself is included when it is a stored token. An unknown
    /// prefix yields an empty vector.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        self.for_each_with_prefix(prefix, |word, _| words.push(word.to_owned()));
        words.sort_unstable();
        words
    }

    /// Calls `f(token, node)` for every stored token starting with `prefix`,
    /// in lexicographic order.
    pub fn for_each_with_prefix<F>(&self, prefix: &str, mut f: F)
    where
        F: FnMut(&str, NodeId),
    {
        let Some(start) = self.walk(prefix) else {
            return;
        };
        let mut buf = String::with_capacity(prefix.len() + 16);
        buf.push_str(prefix);
        self.collect(start, &mut buf, &mut f);
    }

    /// Calls `f(token, node)` for every stored token in lexicographic order.
    #[inline]
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, NodeId),
    {
        self.for_each_with_prefix("", f);
    }

    fn collect<F>(&self, node: NodeId, buf: &mut String, f: &mut F)
    where
        F: FnMut(&str, NodeId),
    {
        let entry = &self.nodes[node as usize];
        if entry.terminal {
            f(buf.as_str(), node);
        }
        for &(ch, child) in &entry.children {
            buf.push(ch);
            self.collect(child, buf, f);
            buf.pop();
        }
    }

    /// Every stored token with its postings, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &[DocId])> + '_ {
        let mut entries = Vec::with_capacity(self.terminals);
        self.for_each(|token, node| entries.push((token.to_owned(), node)));
        entries
            .into_iter()
            .map(move |(token, node)| (token, self.postings_at(node)))
    }

    /// Counts terminal nodes by scanning the arena.
    ///
    /// Every node in the arena is reachable from the root, so this equals
    /// [`Trie::len`] and the vocabulary size.
    pub fn count_terminals(&self) -> usize {
        self.nodes.iter().filter(|node| node.terminal).count()
    }

    /// Records that `doc_id` contains the token ending at `node`.
    ///
    /// Returns `false` if the document was already recorded. Postings stay
    /// sorted; appending ascending ids is the fast path.
    pub fn add_posting(&mut self, node: NodeId, doc_id: DocId) -> bool {
        let postings = &mut self.nodes[node as usize].postings;
        match postings.last().copied() {
            None => {
                postings.push(doc_id);
                true
            }
            Some(last) if last < doc_id => {
                postings.push(doc_id);
                true
            }
            _ => match postings.binary_search(&doc_id) {
                Ok(_) => false,
                Err(i) => {
                    postings.insert(i, doc_id);
                    true
                }
            },
        }
    }

    /// Documents recorded for the token ending at `node`.
    #[inline(always)]
    pub fn postings_at(&self, node: NodeId) -> &[DocId] {
        &self.nodes[node as usize].postings
    }

    /// Documents recorded for `token`; empty if the token is unknown.
    pub fn postings(&self, token: &str) -> &[DocId] {
        match self.node(token) {
            Some(node) => self.postings_at(node),
            None => &[],
        }
    }
}
