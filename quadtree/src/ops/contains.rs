use crate::{Direction, Node, Tree};

impl Tree {
    /// if any item is at or below the node `path` leads to
    ///
    /// `None` is the whole board before any direction was chosen,
    /// there is always assumed to be one item on the board so this is `true`.
    /// `Some(&[])` actually checks the whole tree.
    pub fn contains_item(&self, path: Option<&[Direction]>) -> bool {
        match path {
            None => true,
            Some([]) => self.root().iter().flatten().any(|node| node.contains_item(&[])),
            Some([first, rest @ ..]) => self.root()[*first]
                .as_ref()
                .is_some_and(|node| node.contains_item(rest)),
        }
    }
}

impl Node {
    /// an item is considered to be "below" a leaf, even if the path continues past it
    pub fn contains_item(&self, path: &[Direction]) -> bool {
        let mut node = self;
        let mut path = path;
        loop {
            let children = match node {
                Node::Leaf(_) => return true,
                Node::Inner(children) => children,
            };
            match path {
                [] => return children.iter().flatten().any(|child| child.contains_item(&[])),
                [first, rest @ ..] => match &children[*first] {
                    Some(child) => {
                        node = child;
                        path = rest;
                    }
                    None => return false,
                },
            }
        }
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use proptest::prelude::*;

    use crate::Direction::{self, NorthEast as NE, NorthWest as NW, SouthEast as SE, SouthWest as SW};
    use crate::{encode, Item, Path, Piece, Tree};

    fn tree_at(coords: &[(i32, i32)]) -> Tree {
        Tree::build(coords.iter().map(|&(x, y)| {
            Item::from_path(Piece::Pawn, encode(x, y).expect("in range"), Vec2::ZERO)
        }))
    }

    #[test]
    fn empty() {
        let tree = Tree::empty();
        assert!(!tree.contains_item(Some(&[])));
        assert!(tree.contains_item(None));
        for d in Direction::iter_all() {
            assert!(!tree.contains_item(Some(&[d])));
        }
        assert!(!tree.contains_item(Some(&[NW, NW, NW])));
    }

    #[test]
    fn fixture_prefixes() {
        let fixtures = [
            ((1, 1), [NW, NW, NW]),
            ((8, 8), [SE, SE, SE]),
            ((4, 4), [NW, SE, SE]),
            ((5, 5), [SE, NW, NW]),
        ];
        for ((x, y), expected) in fixtures {
            let path = encode(x, y).expect("in range");
            assert_eq!(Path::new(expected), path);

            let tree = tree_at(&[(x, y)]);
            assert!(tree.contains_item(None));
            for len in 0..=Path::LEN {
                assert!(tree.contains_item(Some(path.prefix(len))), "{x},{y} {len}");
            }
            // one wrong turn at any depth leaves the item behind
            for len in 0..Path::LEN {
                let mut wrong = path.directions();
                wrong[len] = Direction::from_index((wrong[len].index() + 1) % 4).expect("0..4");
                assert!(!tree.contains_item(Some(&wrong[..=len])), "{x},{y} {wrong:?}");
            }
        }
    }

    #[test]
    fn siblings() {
        // (1,1) and (2,1) only differ in the last direction
        let tree = tree_at(&[(1, 1), (2, 1)]);
        assert!(tree.contains_item(Some(&[NW, NW])));
        assert!(tree.contains_item(Some(&[NW, NW, NW])));
        assert!(tree.contains_item(Some(&[NW, NW, NE])));
        assert!(!tree.contains_item(Some(&[NW, NW, SE])));
        assert!(!tree.contains_item(Some(&[NW, NW, SW])));
        assert!(!tree.contains_item(Some(&[NW, NE])));
    }

    #[test]
    fn past_leaf() {
        let tree = tree_at(&[(8, 1)]);
        assert!(tree.contains_item(Some(&[NE, NE, NE, SW])));
        assert!(!tree.contains_item(Some(&[NE, NE, SW, SW])));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        (0..4_usize).prop_map(|i| Direction::from_index(i).expect("0..4"))
    }

    proptest! {
        #[test]
        fn every_prefix_of_every_item(coords in prop::collection::vec((1..=8, 1..=8), 0..12)) {
            let tree = tree_at(&coords);
            prop_assert_eq!(tree.contains_item(Some(&[])), !coords.is_empty());
            for (x, y) in coords {
                let path = encode(x, y).expect("in range");
                for len in 0..=Path::LEN {
                    prop_assert!(tree.contains_item(Some(path.prefix(len))));
                }
            }
        }

        #[test]
        fn matches_scan(
            coords in prop::collection::vec((1..=8, 1..=8), 0..12),
            query in prop::collection::vec(arb_direction(), 0..=3),
        ) {
            let tree = tree_at(&coords);
            let expected = coords
                .iter()
                .any(|&(x, y)| encode(x, y).expect("in range").starts_with(&query));
            prop_assert_eq!(tree.contains_item(Some(query.as_slice())), expected);
        }
    }
}
