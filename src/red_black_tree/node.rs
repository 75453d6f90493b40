use std::rc::Rc;

/// A shared handle to an immutable node. Subtrees are shared between every version of a tree
/// that can reach them, so a node is never modified once it is constructed.
pub type Tree<T> = Rc<Node<T>>;

/// An enum representing the color of a node in a red black tree.
///
/// `DoubleBlack` only exists while a deletion is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
    DoubleBlack,
}

/// An enum representing a node of a persistent red black tree.
pub enum Node<T> {
    /// An empty subtree. Counts as black.
    Leaf,
    /// An empty subtree carrying one unit of black height deficiency.
    DoubleBlackLeaf,
    /// A node holding a single key and two subtrees.
    Interior(Color, Tree<T>, Rc<T>, Tree<T>),
}

pub fn leaf<T>() -> Tree<T> {
    Rc::new(Node::Leaf)
}

pub fn double_black_leaf<T>() -> Tree<T> {
    Rc::new(Node::DoubleBlackLeaf)
}

pub fn interior<T>(color: Color, left: Tree<T>, key: Rc<T>, right: Tree<T>) -> Tree<T> {
    Rc::new(Node::Interior(color, left, key, right))
}

impl<T> Node<T> {
    /// Returns the color of the node. Leaves are black.
    pub fn color(&self) -> Color {
        match self {
            Node::Leaf => Color::Black,
            Node::DoubleBlackLeaf => Color::DoubleBlack,
            Node::Interior(color, ..) => *color,
        }
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Leaf => true,
            _ => false,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_double_black(&self) -> bool {
        self.color() == Color::DoubleBlack
    }

    pub fn key(&self) -> Option<&T> {
        match self {
            Node::Interior(_, _, key, _) => Some(&**key),
            _ => None,
        }
    }

    /// Returns the children and key of an interior node with a particular color, or `None` if the
    /// node is a leaf or has a different color.
    pub fn with_color(&self, color: Color) -> Option<(&Tree<T>, &Rc<T>, &Tree<T>)> {
        match self {
            Node::Interior(node_color, left, key, right) if *node_color == color => {
                Some((left, key, right))
            },
            _ => None,
        }
    }
}
