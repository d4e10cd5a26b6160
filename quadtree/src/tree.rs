use tracing::{debug, trace};

use crate::item::Item;
use crate::path::Path;
use crate::quad::{Direction, Quad};

/// Child slots of an inner node, `None` where nothing was ever placed
pub type Children = Quad<Option<Node>>;

#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    /// depth 1 and 2, always has at least one child
    Inner(Box<Children>),
    /// depth 3
    Leaf(Item),
}
impl Node {
    pub fn inner(&self) -> Option<&Children> {
        match self {
            Self::Inner(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Inner(_) => None,
            Self::Leaf(item) => Some(item),
        }
    }
    pub fn child(&self, dir: Direction) -> Option<&Node> {
        self.inner().and_then(|children| children[dir].as_ref())
    }
}

/// A sparse quadtree over the 8x8 board holding at most one item per cell
///
/// Construct with [`Tree::build`], after that it can only be read.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Tree {
    root: Children,
    len: usize,
}
impl Tree {
    pub const DEPTH: usize = Path::LEN;

    pub fn empty() -> Self {
        Self::default()
    }

    /// places every item at the leaf its path leads to
    ///
    /// Items are placed in order, an item replaces any earlier item with the same path.
    pub fn build(items: impl IntoIterator<Item = Item>) -> Self {
        let mut tree = Tree::empty();
        let mut placed = 0_usize;
        for item in items {
            placed += 1;
            if let Some(replaced) = tree.insert(item) {
                trace!(path = %replaced.path(), piece = %replaced.piece(), "replaced");
            } else {
                tree.len += 1;
            }
        }
        debug!(placed, len = tree.len, "built tree");
        tree
    }

    fn insert(&mut self, item: Item) -> Option<Item> {
        let [first, rest @ ..] = item.path().directions();
        let mut slot = &mut self.root[first];
        for dir in rest {
            let node = slot.get_or_insert_with(|| Node::Inner(Box::default()));
            slot = match node {
                Node::Inner(children) => &mut children[dir],
                Node::Leaf(_) => unreachable!("paths all have the same length"),
            };
        }
        match slot.replace(Node::Leaf(item)) {
            Some(Node::Leaf(replaced)) => Some(replaced),
            Some(Node::Inner(_)) => unreachable!("paths all have the same length"),
            None => None,
        }
    }

    pub fn root(&self) -> &Children {
        &self.root
    }
    /// number of items, replaced items aren't counted
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// every item in direction order
    pub fn items(&self) -> Vec<&Item> {
        fn collect<'t>(children: &'t Children, out: &mut Vec<&'t Item>) {
            for node in children.iter().flatten() {
                match node {
                    Node::Inner(inner) => collect(inner, out),
                    Node::Leaf(item) => out.push(item),
                }
            }
        }
        let mut out = Vec::with_capacity(self.len);
        collect(&self.root, &mut out);
        out
    }
}
impl FromIterator<Item> for Tree {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Tree::build(iter)
    }
}
