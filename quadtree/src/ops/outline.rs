use std::fmt::Write;

use crate::{Direction, Node, Tree};

const INDENT: &str = "     ";

impl Tree {
    /// multi line dump of the tree structure for debugging
    pub fn outline(&self) -> String {
        let mut out = String::from("Root:\n");
        for (dir, child) in self.root().iter_dirs() {
            write_slot(&mut out, 1, dir, child.as_ref());
        }
        out
    }
}

fn write_slot(out: &mut String, depth: usize, dir: Direction, node: Option<&Node>) {
    let indent = INDENT.repeat(depth);
    let name: &str = match dir {
        Direction::NorthWest => "NorthWest",
        Direction::NorthEast => "NorthEast",
        Direction::SouthEast => "SouthEast",
        Direction::SouthWest => "SouthWest",
    };
    // writing to a String can't fail
    let _ = writeln!(out, "{indent}{name}:");
    match node {
        None => {
            let _ = writeln!(out, "{indent}{INDENT}---Empty");
        }
        Some(Node::Leaf(item)) => {
            let _ = writeln!(out, "{indent}{INDENT}---Piece: {}", item.piece());
        }
        Some(Node::Inner(children)) => {
            for (dir, child) in children.iter_dirs() {
                write_slot(out, depth + 1, dir, child.as_ref());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use unindent::unindent;

    use crate::Direction::{NorthEast as NE, SouthWest as SW};
    use crate::{Item, Path, Piece, Tree};

    #[test]
    fn empty() {
        let expected = "
            Root:
                 NorthWest:
                      ---Empty
                 NorthEast:
                      ---Empty
                 SouthEast:
                      ---Empty
                 SouthWest:
                      ---Empty
        ";
        assert_eq!(unindent(expected), Tree::empty().outline());
    }

    #[test]
    fn one_piece() {
        let tree = Tree::build([Item::from_path(
            Piece::Knight,
            Path::new([NE, SW, NE]),
            Vec2::ZERO,
        )]);
        let outline = tree.outline();
        assert!(outline.contains("---Piece: Knight"));
        assert_eq!(1, outline.matches("---Piece").count());
        // 3 empty root slots, 3 empty at depth 2 and 3 empty leaves
        assert_eq!(9, outline.matches("---Empty").count());
        let leaf = format!("{}NorthEast:\n{}---Piece: Knight", " ".repeat(15), " ".repeat(20));
        assert!(outline.contains(&leaf), "{outline}");
    }
}
