use std::fmt;

use thiserror::Error;

use crate::{
    node::{Color, Dir, ImmutNodeRef, Node, NodePtr},
    RbTree,
};

/// A broken tree invariant, as reported by [`RbTree::check`]. Nodes are
/// identified by their position in the in-order sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Violation {
    #[error("the root is red")]
    RedRoot,
    #[error("red node #{rank} has a red child")]
    RedRed { rank: usize },
    #[error(
        "black-heights below node #{rank} differ: {left} on the left, \
         {right} on the right"
    )]
    BlackHeight { rank: usize, left: usize, right: usize },
    #[error("key of node #{rank} is out of order")]
    Ordering { rank: usize },
    #[error("node #{rank} does not point back to its parent")]
    ParentLink { rank: usize },
    #[error("{actual} nodes are reachable, but the length is {expected}")]
    Len { expected: usize, actual: usize },
}

impl<K: Ord> RbTree<K> {
    /// Walks the whole tree and returns the number of black nodes on
    /// every path from the root down to a nil leaf.
    pub fn check(&self) -> Result<usize, Violation> {
        if self.root.map(Node::color) == Some(Color::Red) {
            return Err(Violation::RedRoot);
        }
        self.walk(true)
    }

    /// Same as [`check`](Self::check), ignoring colors.
    pub fn check_structure(&self) -> Result<(), Violation> {
        self.walk(false).map(drop)
    }

    fn walk(&self, colors: bool) -> Result<usize, Violation> {
        let mut rank = 0;
        let black_height =
            dfs(self.root_ref(), None, (None, None), &mut rank, colors)?;
        if rank != self.len {
            return Err(Violation::Len { expected: self.len, actual: rank });
        }
        Ok(black_height)
    }
}

fn dfs<'a, K: Ord>(
    node: Option<ImmutNodeRef<'a, K>>,
    parent: Option<NodePtr<K>>,
    (lo, hi): (Option<&'a K>, Option<&'a K>),
    rank: &mut usize,
    colors: bool,
) -> Result<usize, Violation> {
    let Some(node) = node else { return Ok(0) };
    let key = node.key();
    let ptr = node.as_ptr();

    let left =
        dfs(node.child(Dir::Left), Some(ptr), (lo, Some(key)), rank, colors)?;
    let here = *rank;
    *rank += 1;
    if node.parent() != parent {
        return Err(Violation::ParentLink { rank: here });
    }
    if lo.map_or(false, |lo| key < lo) || hi.map_or(false, |hi| hi < key) {
        return Err(Violation::Ordering { rank: here });
    }
    let right =
        dfs(node.child(Dir::Right), Some(ptr), (Some(key), hi), rank, colors)?;

    if !colors {
        return Ok(0);
    }
    let red = node.color() == Color::Red;
    if red
        && (Node::is_red(Node::child(ptr, Dir::Left))
            || Node::is_red(Node::child(ptr, Dir::Right)))
    {
        return Err(Violation::RedRed { rank: here });
    }
    if left != right {
        return Err(Violation::BlackHeight { rank: here, left, right });
    }
    Ok(left + usize::from(!red))
}

impl<K: fmt::Debug> RbTree<K> {
    /// Draws the tree sideways, right subtrees above their parents.
    ///
    /// ```text
    /// ┌── 20 (B)
    /// │   └── 15 (R)
    /// 10 (B)
    /// └── 5 (B)
    /// ```
    pub fn visualize(&self) -> String {
        #[derive(Clone, Copy)]
        enum Kind {
            Root,
            Upper,
            Lower,
        }

        fn dfs<K: fmt::Debug>(
            node: ImmutNodeRef<'_, K>,
            prefix: &str,
            kind: Kind,
            res: &mut String,
        ) {
            let (upper, connector, lower) = match kind {
                Kind::Root => ("", "", ""),
                Kind::Upper => ("    ", "┌── ", "│   "),
                Kind::Lower => ("│   ", "└── ", "    "),
            };
            if let Some(child) = node.child(Dir::Right) {
                dfs(child, &(prefix.to_owned() + upper), Kind::Upper, res);
            }
            let tag = match node.color() {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            *res += &format!("{prefix}{connector}{:?} ({tag})\n", node.key());
            if let Some(child) = node.child(Dir::Left) {
                dfs(child, &(prefix.to_owned() + lower), Kind::Lower, res);
            }
        }

        let mut res = String::new();
        if let Some(root) = self.root_ref() {
            dfs(root, "", Kind::Root, &mut res);
        }
        res
    }
}
