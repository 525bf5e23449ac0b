//! Decision-trie builder.
//!
//! Compiles a set of same-width descriptors into a binary decision tree over
//! the bits of the instruction word. The tree lives in an arena and nodes
//! refer to each other by [`NodeId`].
//!
//! 1. **Discriminator:** At each node the untested offset fixed by the most
//!    candidates is chosen; ties go to the lowest offset (the most
//!    significant encoding bit).
//! 2. **Split:** Candidates fixing the bit to 0 go left, those fixing it to
//!    1 go right, and the rest form a fallback subtree shared by both
//!    children.
//! 3. **Fallback:** A dead end below a child continues at the nearest
//!    enclosing fallback, so a more specific encoding always wins over a
//!    generic one that ignores the tested bit.
//! 4. **Leaves:** With no untested fixed bit left, one candidate resolves
//!    the node; two or more are a contradiction.

use crate::common::error::BuildError;
use crate::encoding::{FixedBits, InstructionDescriptor};

/// Index of a node in a [`DecisionTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena index of the node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of the decision tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecisionNode {
    /// Offset tested at this node; `None` for leaves.
    pub discriminator: Option<u32>,
    /// Offsets tested by this node's ancestors.
    pub consumed: u32,
    /// Child taken when the tested bit is 0.
    pub zero: Option<NodeId>,
    /// Child taken when the tested bit is 1.
    pub one: Option<NodeId>,
    /// Subtree consulted when this node turns out to be a dead end.
    pub fallback: Option<NodeId>,
    /// Index of the descriptor resolved at this leaf.
    pub resolved: Option<usize>,
}

impl DecisionNode {
    /// Returns true for a leaf that resolves nothing.
    pub const fn is_dead(&self) -> bool {
        self.discriminator.is_none() && self.resolved.is_none()
    }
}

/// Arena of decision nodes, possibly holding several roots.
#[derive(Clone, Debug, Default)]
pub struct DecisionTree {
    nodes: Vec<DecisionNode>,
}

impl DecisionTree {
    /// Creates an empty arena.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node was allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrows a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this tree.
    pub fn node(&self, id: NodeId) -> &DecisionNode {
        &self.nodes[id.index()]
    }

    /// Iterates all node ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Builds a tree over `candidates` and returns its root.
    ///
    /// # Arguments
    ///
    /// * `descriptors` - Constraint-expanded descriptors.
    /// * `candidates` - Indices into `descriptors` to include.
    /// * `width` - Encoding width shared by all candidates.
    ///
    /// # Returns
    ///
    /// The root node, or `BuildError::Contradiction` if two candidates can
    /// not be told apart by their fixed bits.
    pub fn build(
        &mut self,
        descriptors: &[InstructionDescriptor],
        candidates: &[usize],
        width: u32,
    ) -> Result<NodeId, BuildError> {
        let fixed = descriptors.iter().map(InstructionDescriptor::fixed_bits).collect();
        let mut builder = Builder { tree: self, descriptors, fixed, width };
        builder.build(candidates.to_vec(), 0, None)
    }

    /// Follows the tree for a word, consulting fallbacks at dead ends.
    ///
    /// # Arguments
    ///
    /// * `root` - Where to start.
    /// * `bit` - Value of the word at a given offset.
    ///
    /// # Returns
    ///
    /// The resolved descriptor index, or `None` if the word matches nothing.
    pub fn route(&self, root: NodeId, bit: impl Fn(u32) -> bool) -> Option<usize> {
        let mut id = root;
        loop {
            let node = self.node(id);
            if let Some(resolved) = node.resolved {
                return Some(resolved);
            }
            id = match (node.discriminator, node.zero, node.one) {
                (Some(offset), Some(zero), Some(one)) => {
                    if bit(offset) { one } else { zero }
                }
                _ => node.fallback?,
            };
        }
    }

    fn alloc(&mut self, node: DecisionNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

struct Builder<'a> {
    tree: &'a mut DecisionTree,
    descriptors: &'a [InstructionDescriptor],
    fixed: Vec<FixedBits>,
    width: u32,
}

impl Builder<'_> {
    /// Picks the untested offset fixed by the most candidates.
    fn discriminator(&self, candidates: &[usize], consumed: u32) -> Option<u32> {
        let mut best: Option<(u32, usize)> = None;
        for offset in (0..self.width).filter(|o| consumed & (1 << o) == 0) {
            let count = candidates
                .iter()
                .filter(|&&c| self.fixed[c].mask & (1 << offset) != 0)
                .count();
            if count > 0 && best.is_none_or(|(_, n)| count > n) {
                best = Some((offset, count));
            }
        }
        best.map(|(offset, _)| offset)
    }

    fn build(
        &mut self,
        candidates: Vec<usize>,
        consumed: u32,
        fallback: Option<NodeId>,
    ) -> Result<NodeId, BuildError> {
        let Some(offset) = self.discriminator(&candidates, consumed) else {
            return self.leaf(&candidates, consumed, fallback);
        };

        let mut zeros = Vec::new();
        let mut ones = Vec::new();
        let mut dont_care = Vec::new();
        for c in candidates {
            match self.fixed[c].get(offset) {
                Some(false) => zeros.push(c),
                Some(true) => ones.push(c),
                None => dont_care.push(c),
            }
        }

        let id = self.tree.alloc(DecisionNode {
            discriminator: Some(offset),
            consumed,
            fallback,
            ..DecisionNode::default()
        });
        let consumed = consumed | (1 << offset);
        let child_fallback = if dont_care.is_empty() {
            fallback
        } else {
            Some(self.build(dont_care, consumed, fallback)?)
        };
        let zero = self.build(zeros, consumed, child_fallback)?;
        let one = self.build(ones, consumed, child_fallback)?;

        let node = &mut self.tree.nodes[id.index()];
        node.zero = Some(zero);
        node.one = Some(one);
        Ok(id)
    }

    fn leaf(
        &mut self,
        candidates: &[usize],
        consumed: u32,
        fallback: Option<NodeId>,
    ) -> Result<NodeId, BuildError> {
        match *candidates {
            [] => Ok(self.tree.alloc(DecisionNode { consumed, fallback, ..DecisionNode::default() })),
            [only] => Ok(self.tree.alloc(DecisionNode {
                consumed,
                fallback,
                resolved: Some(only),
                ..DecisionNode::default()
            })),
            [first, second, ..] => Err(BuildError::Contradiction {
                first: self.descriptors[first].mnemonic.clone(),
                second: self.descriptors[second].mnemonic.clone(),
            }),
        }
    }
}
