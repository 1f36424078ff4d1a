use log::trace;

use crate::{
    node::{Color, Dir, Node, NodePtr},
    RbTree,
};

impl<K: Ord> RbTree<K> {
    /// Inserts `key`, keeping any equal keys already present.
    ///
    /// Equal keys are routed to the right on the way down, so a new key
    /// lands after its equals in the in-order sequence. Always returns
    /// `true`, as every call adds a node.
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = None;
        let mut dir = Dir::Left;
        let mut cur = self.root;
        while let Some(node) = cur {
            dir = if key < *Node::key(node) { Dir::Left } else { Dir::Right };
            parent = cur;
            cur = Node::child(node, dir);
        }

        let new = Node::new(key, parent);
        match parent {
            Some(parent) => Node::set_child(parent, dir, Some(new)),
            None => self.root = Some(new),
        }
        self.len += 1;
        self.fix_red_red(new);

        #[cfg(feature = "check-invariants")]
        if let Err(violation) = self.check() {
            panic!("invariant broken by insertion: {violation}");
        }
        true
    }
}

impl<K> RbTree<K> {
    fn fix_red_red(&mut self, mut cur: NodePtr<K>) {
        while let Some(mut par) = Node::parent(cur) {
            if Node::color(par) == Color::Black {
                break;
            }
            // `par` is red, hence not the root.
            let Some((gpa, side)) = Node::side(par) else {
                unreachable!("red node at the root");
            };
            let uncle = Node::child(gpa, !side);

            if let Some(uncle) =
                uncle.filter(|&u| Node::color(u) == Color::Red)
            {
                trace!("recolor: {side:?} parent and uncle turn black");
                Node::set_color(par, Color::Black);
                Node::set_color(uncle, Color::Black);
                Node::set_color(gpa, Color::Red);
                cur = gpa;
                continue;
            }

            if Node::child(par, !side) == Some(cur) {
                trace!("straighten: rotate {side:?} at parent");
                self.rotate(par, side);
                par = cur;
            }
            trace!("rotate {:?} at grandparent", !side);
            self.rotate(gpa, !side);
            Node::set_color(par, Color::Black);
            Node::set_color(gpa, Color::Red);
            break;
        }

        if let Some(root) = self.root {
            Node::set_color(root, Color::Black);
        }
    }
}
