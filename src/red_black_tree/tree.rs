use crate::red_black_tree::node::{self, Color, Node, Tree};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::rc::Rc;

/// Returns the empty tree.
pub fn empty<T>() -> Tree<T> {
    node::leaf()
}

pub fn contains<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match &**tree {
        Node::Interior(_, left, node_key, right) => {
            match key.cmp((**node_key).borrow()) {
                Ordering::Less => contains(left, key),
                Ordering::Greater => contains(right, key),
                Ordering::Equal => true,
            }
        },
        _ => false,
    }
}

// Builds a red node over two black nodes holding `x` and `z`. The arguments are the keys and the
// four subtrees in order.
#[allow(clippy::too_many_arguments)]
fn rebuild<T>(
    color: Color,
    a: &Tree<T>,
    x: &Rc<T>,
    b: &Tree<T>,
    y: &Rc<T>,
    c: &Tree<T>,
    z: &Rc<T>,
    d: &Tree<T>,
) -> Tree<T> {
    node::interior(
        color,
        node::interior(Color::Black, a.clone(), x.clone(), b.clone()),
        y.clone(),
        node::interior(Color::Black, c.clone(), z.clone(), d.clone()),
    )
}

/// Resolves a red node with a red child under a black or double black node. The middle key of the
/// three becomes the root of the window with black children. The root is red when the window was
/// rooted at a black node and black when it was rooted at a double black node.
pub fn balance<T>(color: Color, left: Tree<T>, key: Rc<T>, right: Tree<T>) -> Tree<T> {
    let root_color = match color {
        Color::Red => return node::interior(color, left, key, right),
        Color::Black => Color::Red,
        Color::DoubleBlack => Color::Black,
    };

    if let Some((ll, lk, lr)) = left.with_color(Color::Red) {
        if let Some((a, x, b)) = ll.with_color(Color::Red) {
            return rebuild(root_color, a, x, b, lk, lr, &key, &right);
        }
        if let Some((b, y, c)) = lr.with_color(Color::Red) {
            return rebuild(root_color, ll, lk, b, y, c, &key, &right);
        }
    }

    if let Some((rl, rk, rr)) = right.with_color(Color::Red) {
        if let Some((b, y, c)) = rl.with_color(Color::Red) {
            return rebuild(root_color, &left, &key, b, y, c, rk, rr);
        }
        if let Some((c, z, d)) = rr.with_color(Color::Red) {
            return rebuild(root_color, &left, &key, rl, rk, c, z, d);
        }
    }

    node::interior(color, left, key, right)
}

/// Recolors the root black. A double black leaf at the root becomes an ordinary leaf.
pub fn blacken<T>(tree: &Tree<T>) -> Tree<T> {
    match &**tree {
        Node::DoubleBlackLeaf => node::leaf(),
        Node::Interior(color, left, key, right) if *color != Color::Black => {
            node::interior(Color::Black, left.clone(), key.clone(), right.clone())
        },
        _ => tree.clone(),
    }
}

fn ins<T>(tree: &Tree<T>, key: T) -> Tree<T>
where
    T: Ord,
{
    match &**tree {
        Node::Leaf => node::interior(Color::Red, node::leaf(), Rc::new(key), node::leaf()),
        Node::DoubleBlackLeaf => panic!("Unexpected double black leaf during insertion."),
        Node::Interior(color, left, node_key, right) => {
            match key.cmp(&**node_key) {
                Ordering::Less => balance(*color, ins(left, key), node_key.clone(), right.clone()),
                Ordering::Greater => {
                    balance(*color, left.clone(), node_key.clone(), ins(right, key))
                },
                Ordering::Equal => tree.clone(),
            }
        },
    }
}

/// Inserts a key into a tree, returning the new tree. If the key already exists, the original
/// tree is returned.
pub fn insert<T>(tree: &Tree<T>, key: T) -> Tree<T>
where
    T: Ord,
{
    if contains(tree, &key) {
        return tree.clone();
    }
    let ret = blacken(&ins(tree, key));
    debug_assert!(ret.color() == Color::Black);
    ret
}

/// Recolors a black root red if both of its children are black interior nodes, so that a
/// deficiency propagated to the root can be absorbed.
pub fn redden<T>(tree: &Tree<T>) -> Tree<T> {
    if let Some((left, key, right)) = tree.with_color(Color::Black) {
        if left.with_color(Color::Black).is_some() && right.with_color(Color::Black).is_some() {
            return node::interior(Color::Red, left.clone(), key.clone(), right.clone());
        }
    }
    tree.clone()
}

// Removes one unit of blackness from a double black child.
fn discharge<T>(tree: &Tree<T>) -> Tree<T> {
    match &**tree {
        Node::DoubleBlackLeaf => node::leaf(),
        Node::Interior(Color::DoubleBlack, left, key, right) => {
            node::interior(Color::Black, left.clone(), key.clone(), right.clone())
        },
        _ => panic!("Expected a double black subtree."),
    }
}

/// Resolves a double black child of the node `(color, left, key, right)`. The deficiency is either
/// absorbed or moved to the returned root. Nodes without a double black child are rebuilt
/// unchanged.
pub fn rotate<T>(color: Color, left: Tree<T>, key: Rc<T>, right: Tree<T>) -> Tree<T> {
    match color {
        Color::Red => {
            if left.is_double_black() {
                if let Some((c, z, d)) = right.with_color(Color::Black) {
                    let new_left = node::interior(Color::Red, discharge(&left), key, c.clone());
                    return balance(Color::Black, new_left, z.clone(), d.clone());
                }
            }
            if right.is_double_black() {
                if let Some((a, x, b)) = left.with_color(Color::Black) {
                    let new_right = node::interior(Color::Red, b.clone(), key, discharge(&right));
                    return balance(Color::Black, a.clone(), x.clone(), new_right);
                }
            }
        },
        Color::Black => {
            if left.is_double_black() {
                if let Some((c, z, d)) = right.with_color(Color::Black) {
                    let new_left = node::interior(Color::Red, discharge(&left), key, c.clone());
                    return balance(Color::DoubleBlack, new_left, z.clone(), d.clone());
                }
                if let Some((rl, z, e)) = right.with_color(Color::Red) {
                    if let Some((c, y, d)) = rl.with_color(Color::Black) {
                        let new_left = node::interior(Color::Red, discharge(&left), key, c.clone());
                        return node::interior(
                            Color::Black,
                            balance(Color::Black, new_left, y.clone(), d.clone()),
                            z.clone(),
                            e.clone(),
                        );
                    }
                }
            }
            if right.is_double_black() {
                if let Some((a, x, b)) = left.with_color(Color::Black) {
                    let new_right = node::interior(Color::Red, b.clone(), key, discharge(&right));
                    return balance(Color::DoubleBlack, a.clone(), x.clone(), new_right);
                }
                if let Some((a, w, lr)) = left.with_color(Color::Red) {
                    if let Some((b, x, c)) = lr.with_color(Color::Black) {
                        let new_right =
                            node::interior(Color::Red, c.clone(), key, discharge(&right));
                        return node::interior(
                            Color::Black,
                            a.clone(),
                            w.clone(),
                            balance(Color::Black, b.clone(), x.clone(), new_right),
                        );
                    }
                }
            }
        },
        Color::DoubleBlack => {},
    }
    node::interior(color, left, key, right)
}

// Removes the minimum key of a non-empty tree, returning it with the remaining tree. The remaining
// tree may be double black.
fn r_del<T>(tree: &Tree<T>) -> (Rc<T>, Tree<T>) {
    match &**tree {
        Node::Interior(color, left, key, right) => {
            if left.is_leaf() {
                if right.is_leaf() {
                    return match color {
                        Color::Red => (key.clone(), node::leaf()),
                        Color::Black => (key.clone(), node::double_black_leaf()),
                        Color::DoubleBlack => panic!("Unexpected double black node in r_del."),
                    };
                }
                if *color == Color::Black {
                    if let Some((a, y, b)) = right.with_color(Color::Red) {
                        let rest = node::interior(Color::Black, a.clone(), y.clone(), b.clone());
                        return (key.clone(), rest);
                    }
                }
            }
            let (min_key, new_left) = r_del(left);
            (min_key, rotate(*color, new_left, key.clone(), right.clone()))
        },
        _ => panic!("Expected a non-empty subtree in r_del."),
    }
}

fn del<T, V>(tree: &Tree<T>, key: &V) -> Tree<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match &**tree {
        Node::Leaf => tree.clone(),
        Node::DoubleBlackLeaf => panic!("Unexpected double black leaf in del."),
        Node::Interior(Color::DoubleBlack, ..) => panic!("Unexpected double black node in del."),
        Node::Interior(color, left, node_key, right) => {
            let ordering = key.cmp((**node_key).borrow());

            if left.is_leaf() && right.is_leaf() {
                return match (ordering, color) {
                    (Ordering::Equal, Color::Red) => node::leaf(),
                    (Ordering::Equal, _) => node::double_black_leaf(),
                    _ => tree.clone(),
                };
            }

            if *color == Color::Black && right.is_leaf() {
                if let Some((a, y, b)) = left.with_color(Color::Red) {
                    if a.is_leaf() && b.is_leaf() {
                        return match ordering {
                            Ordering::Less => {
                                node::interior(
                                    Color::Black,
                                    del(left, key),
                                    node_key.clone(),
                                    right.clone(),
                                )
                            },
                            Ordering::Equal => {
                                node::interior(Color::Black, a.clone(), y.clone(), b.clone())
                            },
                            Ordering::Greater => tree.clone(),
                        };
                    }
                }
            }

            match ordering {
                Ordering::Less => rotate(*color, del(left, key), node_key.clone(), right.clone()),
                Ordering::Greater => {
                    rotate(*color, left.clone(), node_key.clone(), del(right, key))
                },
                Ordering::Equal => {
                    let (successor, new_right) = r_del(right);
                    rotate(*color, left.clone(), successor, new_right)
                },
            }
        },
    }
}

/// Deletes a key from a tree, returning the new tree. If the key does not exist, the original
/// tree is returned.
pub fn delete<T, V>(tree: &Tree<T>, key: &V) -> Tree<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if !contains(tree, key) {
        return tree.clone();
    }
    let ret = del(&redden(tree), key);
    debug_assert!(
        ret.with_color(Color::DoubleBlack).is_none(),
        "Double black node escaped deletion."
    );
    debug_assert!(
        match ret.with_color(Color::Red) {
            Some((left, _, right)) => !left.is_red() && !right.is_red(),
            None => true,
        },
        "Red root with a red child after deletion."
    );
    blacken(&ret)
}

pub fn len<T>(tree: &Tree<T>) -> usize {
    match &**tree {
        Node::Interior(_, left, _, right) => len(left) + len(right) + 1,
        _ => 0,
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree;
    while let Node::Interior(_, left, _, _) = &**curr {
        if left.is_leaf() {
            return curr.key();
        }
        curr = left;
    }
    None
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree;
    while let Node::Interior(_, _, _, right) = &**curr {
        if right.is_leaf() {
            return curr.key();
        }
        curr = right;
    }
    None
}

/// Appends the keys of a tree to `keys` using in-order traversal.
pub fn in_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Node::Interior(_, left, key, right) = &**tree {
        in_order(left, keys);
        keys.push(&**key);
        in_order(right, keys);
    }
}

/// Returns the number of black nodes on every root to leaf path, or `None` if the paths disagree
/// or the tree contains a double black node.
pub fn black_height<T>(tree: &Tree<T>) -> Option<usize> {
    match &**tree {
        Node::Leaf => Some(0),
        Node::DoubleBlackLeaf => None,
        Node::Interior(color, left, _, right) => {
            let left_height = black_height(left)?;
            if black_height(right)? != left_height {
                return None;
            }
            match color {
                Color::Red => Some(left_height),
                Color::Black => Some(left_height + 1),
                Color::DoubleBlack => None,
            }
        },
    }
}

pub fn has_adjacent_reds<T>(tree: &Tree<T>) -> bool {
    match &**tree {
        Node::Interior(color, left, _, right) => {
            (*color == Color::Red && (left.is_red() || right.is_red()))
                || has_adjacent_reds(left)
                || has_adjacent_reds(right)
        },
        _ => false,
    }
}

pub fn is_ordered<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    let mut keys = Vec::new();
    in_order(tree, &mut keys);
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

/// Checks every invariant of a tree returned by a completed operation.
pub fn is_valid<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    !tree.is_red()
        && black_height(tree).is_some()
        && !has_adjacent_reds(tree)
        && is_ordered(tree)
}
