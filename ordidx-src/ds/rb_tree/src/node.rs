use std::{marker::PhantomData, ops::Not, ptr::NonNull};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Not for Dir {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

pub(crate) type NodePtr<K> = NonNull<Node<K>>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    // Not an ownership edge; children are owned through `children` only.
    pub(crate) parent: Option<NodePtr<K>>,
    pub(crate) children: [Option<NodePtr<K>>; 2],
}

impl<K> Node<K> {
    pub fn new(key: K, parent: Option<NodePtr<K>>) -> NodePtr<K> {
        let node =
            Self { key, color: Color::Red, parent, children: [None, None] };
        NonNull::from(Box::leak(Box::new(node)))
    }

    pub fn key<'a>(this: NodePtr<K>) -> &'a K {
        unsafe { &(*this.as_ptr()).key }
    }
    pub fn color(this: NodePtr<K>) -> Color {
        unsafe { (*this.as_ptr()).color }
    }
    pub fn set_color(this: NodePtr<K>, color: Color) {
        unsafe { (*this.as_ptr()).color = color }
    }
    pub fn parent(this: NodePtr<K>) -> Option<NodePtr<K>> {
        unsafe { (*this.as_ptr()).parent }
    }
    pub fn set_parent(this: NodePtr<K>, parent: Option<NodePtr<K>>) {
        unsafe { (*this.as_ptr()).parent = parent }
    }
    pub fn child(this: NodePtr<K>, dir: Dir) -> Option<NodePtr<K>> {
        unsafe { (*this.as_ptr()).children[dir as usize] }
    }
    pub fn set_child(this: NodePtr<K>, dir: Dir, child: Option<NodePtr<K>>) {
        unsafe { (*this.as_ptr()).children[dir as usize] = child }
    }

    /// The parent of `this` together with the side `this` hangs on.
    pub fn side(this: NodePtr<K>) -> Option<(NodePtr<K>, Dir)> {
        let parent = Self::parent(this)?;
        let dir = if Self::child(parent, Dir::Left) == Some(this) {
            Dir::Left
        } else {
            debug_assert_eq!(Self::child(parent, Dir::Right), Some(this));
            Dir::Right
        };
        Some((parent, dir))
    }

    // Nil leaves are black.
    pub fn is_red(node: Option<NodePtr<K>>) -> bool {
        node.map_or(false, |node| Self::color(node) == Color::Red)
    }
}

pub(crate) mod marker {
    use std::marker::PhantomData;

    pub enum Dying {}
    pub struct Immut<'a>(PhantomData<&'a ()>);
}

pub(crate) struct NodeRef<BorrowType, K> {
    node: NodePtr<K>,
    _marker: PhantomData<(BorrowType, K)>,
}

pub(crate) type ImmutNodeRef<'a, K> = NodeRef<marker::Immut<'a>, K>;
pub(crate) type DyingNodeRef<K> = NodeRef<marker::Dying, K>;

impl<'a, K> Copy for ImmutNodeRef<'a, K> {}
impl<'a, K> Clone for ImmutNodeRef<'a, K> {
    fn clone(&self) -> Self { *self }
}

unsafe impl<K: Sync> Sync for ImmutNodeRef<'_, K> {}
unsafe impl<K: Sync> Send for ImmutNodeRef<'_, K> {}

impl<BorrowType, K> NodeRef<BorrowType, K> {
    pub fn from_node(node: NodePtr<K>) -> Self {
        NodeRef { node, _marker: PhantomData }
    }
    pub fn as_ptr(&self) -> NodePtr<K> { self.node }
}

impl<'a, K> ImmutNodeRef<'a, K> {
    pub fn key(self) -> &'a K { unsafe { &(*self.node.as_ptr()).key } }
    pub fn color(self) -> Color { Node::color(self.node) }
    pub fn parent(self) -> Option<NodePtr<K>> { Node::parent(self.node) }
    pub fn child(self, dir: Dir) -> Option<Self> {
        Node::child(self.node, dir).map(NodeRef::from_node)
    }

    /// Follows `dir` as far as possible.
    pub fn last_toward(self, dir: Dir) -> Self {
        let mut cur = self;
        while let Some(next) = cur.child(dir) {
            cur = next;
        }
        cur
    }

    pub fn height(self) -> usize {
        let left = self.child(Dir::Left).map_or(0, |child| child.height());
        let right = self.child(Dir::Right).map_or(0, |child| child.height());
        1 + left.max(right)
    }
}

impl<K> DyingNodeRef<K> {
    pub fn drop_subtree(self) {
        let node = unsafe { Box::from_raw(self.node.as_ptr()) };
        let children = node.children;
        drop(node);
        for child in children.into_iter().flatten() {
            DyingNodeRef::from_node(child).drop_subtree();
        }
    }
}
