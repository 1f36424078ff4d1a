use log::debug;

use crate::{
    node::{Dir, Node, NodePtr},
    RbTree,
};

impl<K> RbTree<K> {
    /// Moves `pivot` one level down toward `dir` and lifts its child on
    /// the other side into the vacated slot. `rotate(x, Dir::Left)` is
    /// the usual left rotation. Colors are left untouched.
    ///
    /// ```text
    ///       x                y
    ///      / \              / \
    ///     a   y     =>     x   c
    ///        / \          / \
    ///       b   c        a   b
    /// ```
    pub(crate) fn rotate(
        &mut self,
        pivot: NodePtr<K>,
        dir: Dir,
    ) -> NodePtr<K> {
        let Some(riser) = Node::child(pivot, !dir) else {
            unreachable!("no child to rotate up on the {:?} side", !dir);
        };
        let side = Node::side(pivot);

        let inner = Node::child(riser, dir);
        Node::set_child(pivot, !dir, inner);
        if let Some(inner) = inner {
            Node::set_parent(inner, Some(pivot));
        }

        Node::set_parent(riser, side.map(|(parent, _)| parent));
        match side {
            Some((parent, side)) => Node::set_child(parent, side, Some(riser)),
            None => {
                debug!("rotation replaced the root ({} nodes)", self.len);
                self.root = Some(riser);
            }
        }

        Node::set_child(riser, dir, Some(pivot));
        Node::set_parent(pivot, Some(riser));
        riser
    }
}
