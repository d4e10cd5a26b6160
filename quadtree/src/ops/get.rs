use crate::{Direction, Item, Node, Path, Tree};

impl Tree {
    /// the item at the leaf `path` leads to
    pub fn get(&self, path: &Path) -> Option<&Item> {
        let [first, rest @ ..] = path.directions();
        self.root()[first].as_ref()?.descend(&rest)?.item()
    }
}

impl Node {
    /// the node `path` leads to, `None` if a slot on the way is empty
    pub fn descend(&self, path: &[Direction]) -> Option<&Node> {
        path.iter().try_fold(self, |node, &dir| node.child(dir))
    }
}
