//! A height-balanced BST holding one orderable content value per node.
//!
//! The balanced shape comes from construction: the sorted input is
//! recursively partitioned around its middle element, giving a tree of
//! height `O(lg N)`. Inserts and deletes never rebalance on their own;
//! [`Tree::rebalance`] rebuilds a fresh balanced tree on demand and the
//! caller reassigns the handle.
//!
//! Searching is deliberately exhaustive by default: [`Tree::find`] walks the
//! node, then the whole left subtree, then the whole right subtree, without
//! pruning on comparisons. The conventional `O(height)` descent is available
//! by switching the tree to [`SearchMode::Pruned`].
//!
//! # Examples
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree = Tree::from_values(vec![8, 4, 13, 2, 6, 11, 16, 9]);
//!
//! // In-order traversal of a BST yields ascending content.
//! assert_eq!(tree.in_order(), [&2, &4, &6, &8, &9, &11, &13, &16]);
//! assert_eq!(tree.height(), Some(3));
//!
//! tree.insert(5);
//! assert_eq!(tree.find(&5), Some(&5));
//!
//! assert!(tree.delete(&5));
//! assert_eq!(tree.find(&5), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ptr;

use crate::sort;

/// How [`Tree::find`] and [`Tree::find_node`] walk the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Visit the node, then the entire left subtree, then the entire right
    /// subtree, with no pruning on comparison outcome. The first match in
    /// that order wins. This is the default.
    Exhaustive,
    /// Standard BST descent: compare at each node and follow a single
    /// branch. `O(height)` instead of `O(N)`, but values hidden by a
    /// violated ordering invariant (possible via [`Tree::from_sorted`] with
    /// misordered input) become unreachable.
    Pruned,
}

impl Default for SearchMode {
    fn default() -> Self {
        Self::Exhaustive
    }
}

/// One tree vertex: a content value and up to two exclusively-owned
/// children. There are no parent pointers; traversal state lives in the
/// callers.
#[derive(Clone, Debug)]
pub struct Node<T> {
    content: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(content: T) -> Self {
        Self {
            content,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Counts the full frontier levels below this node, breadth-first.
    /// A node with no children has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = VecDeque::new();
        queue.push_back(self);
        let mut children = Vec::new();

        while let Some(node) = queue.pop_front() {
            if let Some(left) = node.left() {
                children.push(left);
            }
            if let Some(right) = node.right() {
                children.push(right);
            }

            // The current frontier is exhausted; descend into the next one.
            if queue.is_empty() && !children.is_empty() {
                queue.extend(children.drain(..));
                height += 1;
            }
        }

        height
    }

    /// Whether this node's child heights differ by exactly one.
    ///
    /// Note the strictness: equal child heights do *not* count as balanced
    /// under this rule, so a leaf (or any perfectly symmetric node) reports
    /// `false`. An absent child counts as height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// // Both children of the root are leaves: equal heights, not ±1.
    /// let tree = Tree::from_values(vec![1, 2, 3]);
    /// assert!(!tree.root().unwrap().is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let left_height = self.left().map_or(0, Node::height) as isize;
        let right_height = self.right().map_or(0, Node::height) as isize;

        left_height - right_height == 1 || left_height - right_height == -1
    }

    /// The level of `target` within the subtree rooted at this node, where
    /// this node itself is level 0. Both branches are searched; nodes are
    /// identified by address, not content. Returns `None` when `target` is
    /// not reachable from this node.
    pub fn depth(&self, target: &Node<T>) -> Option<usize> {
        self.depth_from(target, 0)
    }

    fn depth_from(&self, target: &Node<T>, level: usize) -> Option<usize> {
        if ptr::eq(self, target) {
            return Some(level);
        }

        self.left()
            .and_then(|left| left.depth_from(target, level + 1))
            .or_else(|| {
                self.right()
                    .and_then(|right| right.depth_from(target, level + 1))
            })
    }
}

/// A BST that is balanced when built and rebalanced only on demand.
///
/// The tree is nothing more than an owning handle to its root node plus the
/// configured [`SearchMode`]; see the [module docs](self) for an overview of
/// the operations.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    search: SearchMode,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            search: SearchMode::default(),
        }
    }

    /// Builds a balanced tree from arbitrary values by sorting them first
    /// (see [`sort::merge_sort`]) and handing the result to
    /// [`Tree::from_sorted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![8, 4, 13, 2, 6, 11, 16, 9]);
    ///
    /// assert_eq!(tree.level_order(), [&8, &4, &11, &2, &6, &9, &13, &16]);
    /// ```
    pub fn from_values(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        Self::from_sorted(sort::merge_sort(values))
    }

    /// Builds a balanced tree from already-sorted values.
    ///
    /// Each subtree root is the middle element of its range, biased toward
    /// the lower index on even-length ranges; an empty range yields an
    /// absent subtree. Sortedness is the caller's responsibility and is not
    /// checked; duplicates are kept as given. In-order traversal of the
    /// result reproduces the input exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.in_order(), [&1, &2, &3, &4]);
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self {
        let mut slots = values.into_iter().map(Some).collect::<Vec<_>>();
        Self {
            root: Self::build_balanced(&mut slots),
            search: SearchMode::default(),
        }
    }

    fn build_balanced(sorted: &mut [Option<T>]) -> Option<Box<Node<T>>> {
        if sorted.is_empty() {
            return None;
        }

        // Matches the `(first + last) / 2` middle of the index range.
        let middle = (sorted.len() - 1) / 2;
        let (left, rest) = sorted.split_at_mut(middle);
        let (slot, right) = rest.split_first_mut().expect("middle is in bounds");

        Some(Box::new(Node {
            content: slot.take().expect("every slot is taken exactly once"),
            left: Self::build_balanced(left),
            right: Self::build_balanced(right),
        }))
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The currently configured [`SearchMode`].
    pub fn search_mode(&self) -> SearchMode {
        self.search
    }

    /// Switches how [`Tree::find`] and [`Tree::find_node`] walk the tree.
    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.search = mode;
    }

    /// Potentially finds the value equal to `value` in this tree, walking
    /// it according to the configured [`SearchMode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::{SearchMode, Tree};
    ///
    /// // `from_sorted` trusts its caller, so a misordered input builds a
    /// // tree whose ordering invariant is broken. The exhaustive default
    /// // still finds everything; a pruned descent does not.
    /// let mut tree = Tree::from_sorted(vec![3, 1, 2]);
    /// assert_eq!(tree.find(&3), Some(&3));
    ///
    /// tree.set_search_mode(SearchMode::Pruned);
    /// assert_eq!(tree.find(&3), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find_node(value).map(Node::content)
    }

    /// Like [`Tree::find`] but returns the matching node itself, which can
    /// then be fed to [`Tree::depth`].
    pub fn find_node(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match self.search {
            SearchMode::Exhaustive => Self::locate(self.root(), value),
            SearchMode::Pruned => Self::locate_pruned(self.root(), value),
        }
    }

    fn locate<'a>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
    where
        T: Ord,
    {
        let node = node?;
        if node.content == *value {
            return Some(node);
        }

        Self::locate(node.left(), value).or_else(|| Self::locate(node.right(), value))
    }

    fn locate_pruned<'a>(mut node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
    where
        T: Ord,
    {
        while let Some(current) = node {
            node = match value.cmp(&current.content) {
                Ordering::Less => current.left(),
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right(),
            };
        }
        None
    }

    /// Inserts the given value as a new leaf, located breadth-first from the
    /// root: lesser values descend left, greater values descend right, and
    /// the new node attaches at the first missing child on its side.
    ///
    /// Equal content extends no branch, so inserting a duplicate leaves the
    /// tree unchanged. No rebalancing happens; repeated skewed inserts can
    /// grow the height to `O(N)` until [`Tree::rebalance`] is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// tree.insert(4);
    /// assert_eq!(tree.find(&4), Some(&4));
    ///
    /// // Duplicates are silently dropped.
    /// tree.insert(4);
    /// assert_eq!(tree.in_order(), [&1, &2, &3, &4]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let root = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(Node::new(value)));
                return;
            }
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            match value.cmp(&node.content) {
                Ordering::Less => {
                    if node.left.is_some() {
                        queue.push_back(node.left.as_deref_mut().unwrap());
                    } else {
                        node.left = Some(Box::new(Node::new(value)));
                        return;
                    }
                }
                Ordering::Greater => {
                    if node.right.is_some() {
                        queue.push_back(node.right.as_deref_mut().unwrap());
                    } else {
                        node.right = Some(Box::new(Node::new(value)));
                        return;
                    }
                }
                // Neither branch fires on equal content. The queue simply
                // drains and the duplicate is dropped.
                Ordering::Equal => {}
            }
        }
    }

    /// Deletes the node whose content equals `value`, returning whether such
    /// a node existed. The target is located by content equality in the same
    /// node-then-left-then-right order as an exhaustive [`Tree::find`].
    ///
    /// A leaf is unlinked from its parent. A node with one child is replaced
    /// by that child. A node with two children takes its in-order
    /// successor's content (the leftmost node of its right subtree, or the
    /// right child itself when it has no left child) and the successor is
    /// unlinked, with the successor's own right subtree reattached in its
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// assert!(tree.delete(&1));
    /// assert_eq!(tree.find(&1), None);
    ///
    /// // Nothing left to act on.
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        Self::delete_at(&mut self.root, value)
    }

    fn delete_at(link: &mut Option<Box<Node<T>>>, value: &T) -> bool
    where
        T: Ord,
    {
        let node = match link.as_deref_mut() {
            Some(node) => node,
            None => return false,
        };

        if node.content == *value {
            Self::rebind(link);
            return true;
        }

        Self::delete_at(&mut node.left, value) || Self::delete_at(&mut node.right, value)
    }

    /// Removes the node behind `link` from the tree, rebinding the link by
    /// child count.
    fn rebind(link: &mut Option<Box<Node<T>>>) {
        let node = match link.as_deref_mut() {
            Some(node) => node,
            None => return,
        };

        match (node.left.take(), node.right.take()) {
            // A leaf is unlinked outright.
            (None, None) => *link = None,
            // A single child takes the deleted node's place, grandchildren
            // and all.
            (Some(child), None) | (None, Some(child)) => *link = Some(child),
            // With two children, the in-order successor's content replaces
            // the deleted content and the successor is unlinked.
            (Some(left), Some(mut right)) => {
                node.left = Some(left);
                if right.left.is_none() {
                    node.content = right.content;
                    node.right = right.right;
                } else {
                    let successor = Self::detach_leftmost(&mut right.left)
                        .expect("right child has a left subtree");
                    node.content = successor.content;
                    node.right = Some(right);
                }
            }
        }
    }

    /// Unlinks and returns the leftmost node reachable from `link`,
    /// reattaching that node's right subtree to its parent.
    fn detach_leftmost(link: &mut Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        let node = link.as_deref_mut()?;
        if node.left.is_some() {
            Self::detach_leftmost(&mut node.left)
        } else {
            let mut leftmost = link.take()?;
            *link = leftmost.right.take();
            Some(leftmost)
        }
    }

    /// Collects node contents breadth-first, enqueueing each node's left
    /// child before its right child.
    pub fn level_order(&self) -> Vec<&T> {
        let mut elements = Vec::new();
        self.level_order_with(|node| elements.push(node.content()));
        elements
    }

    /// Visits every node breadth-first, invoking `visit` once per node. An
    /// empty tree invokes nothing.
    pub fn level_order_with<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }

        while let Some(node) = queue.pop_front() {
            visit(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
    }

    /// Collects node contents in pre-order: node, left subtree, right
    /// subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut elements = Vec::new();
        self.pre_order_with(|node| elements.push(node.content()));
        elements
    }

    /// Visits every node in pre-order, invoking `visit` once per node.
    pub fn pre_order_with<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        pre_order_nodes(self.root(), &mut visit);
    }

    /// Collects node contents in-order: left subtree, node, right subtree.
    /// For a tree honoring the BST invariant this is ascending content
    /// order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut elements = Vec::new();
        self.in_order_with(|node| elements.push(node.content()));
        elements
    }

    /// Visits every node in-order, invoking `visit` once per node.
    pub fn in_order_with<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        in_order_nodes(self.root(), &mut visit);
    }

    /// Collects node contents in post-order: left subtree, right subtree,
    /// node.
    pub fn post_order(&self) -> Vec<&T> {
        let mut elements = Vec::new();
        self.post_order_with(|node| elements.push(node.content()));
        elements
    }

    /// Visits every node in post-order, invoking `visit` once per node.
    pub fn post_order_with<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        post_order_nodes(self.root(), &mut visit);
    }

    /// The root's [`Node::height`], or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// The level of `target` below the root (see [`Node::depth`]), or
    /// `None` when the tree is empty or does not contain `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    /// let node = tree.find_node(&3).unwrap();
    ///
    /// assert_eq!(tree.depth(node), Some(1));
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize> {
        self.root().and_then(|root| root.depth(target))
    }

    /// The root's [`Node::is_balanced`] under the strict
    /// exactly-one-height-difference rule, or `None` for an empty tree.
    pub fn is_balanced(&self) -> Option<bool> {
        self.root().map(Node::is_balanced)
    }

    /// Builds a freshly balanced tree over this tree's contents, collected
    /// in pre-order and re-sorted. Returns `None` when there is nothing to
    /// rebuild. The original tree is untouched; the caller reassigns the
    /// returned handle. The configured [`SearchMode`] carries over.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=7 {
    ///     tree.insert(x);
    /// }
    ///
    /// // Ascending inserts degenerate into a chain.
    /// assert_eq!(tree.height(), Some(6));
    ///
    /// if let Some(rebuilt) = tree.rebalance() {
    ///     tree = rebuilt;
    /// }
    /// assert_eq!(tree.height(), Some(2));
    /// assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6, &7]);
    /// ```
    pub fn rebalance(&self) -> Option<Tree<T>>
    where
        T: Ord + Clone,
    {
        let contents = self.pre_order().into_iter().cloned().collect::<Vec<_>>();
        if contents.is_empty() {
            return None;
        }

        let mut rebuilt = Self::from_values(contents);
        rebuilt.search = self.search;
        Some(rebuilt)
    }
}

fn pre_order_nodes<'a, T>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        visit(node);
        pre_order_nodes(node.left(), visit);
        pre_order_nodes(node.right(), visit);
    }
}

fn in_order_nodes<'a, T>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        in_order_nodes(node.left(), visit);
        visit(node);
        in_order_nodes(node.right(), visit);
    }
}

fn post_order_nodes<'a, T>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        post_order_nodes(node.left(), visit);
        post_order_nodes(node.right(), visit);
        visit(node);
    }
}
