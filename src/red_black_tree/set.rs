use crate::red_black_tree::node::Tree;
use crate::red_black_tree::tree;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered, persistent set implemented using a red black tree.
///
/// Every operation that modifies the set returns a new set and leaves the original intact. The two
/// versions share every subtree that the operation did not touch, so cloning a set and modifying
/// the clone only allocates the nodes on a single root to leaf path.
///
/// # Examples
///
/// ```
/// use persistent_rbtree::red_black_tree::RedBlackSet;
///
/// let set = RedBlackSet::new().insert(0).insert(3);
/// let smaller = set.remove(&0);
///
/// assert!(set.contains(&0));
/// assert!(!smaller.contains(&0));
/// assert!(smaller.contains(&3));
/// ```
pub struct RedBlackSet<T> {
    root: Tree<T>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { root: tree::empty() }
    }

    /// Returns the root of the underlying tree for read only traversal.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns the number of elements in the set. The tree does not store sizes, so this walks
    /// every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new().insert(1).insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new().insert(1).insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new().insert(1).insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    fn keys(&self) -> Vec<&T> {
        let mut keys = Vec::new();
        tree::in_order(&self.root, &mut keys);
        keys
    }
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Returns a set containing every key of this set and `key`. If the key already exists, the
    /// returned set shares the root of this set.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let empty = RedBlackSet::new();
    /// let set = empty.insert(1);
    /// assert!(!empty.contains(&1));
    /// assert!(set.contains(&1));
    /// ```
    pub fn insert(&self, key: T) -> Self {
        RedBlackSet {
            root: tree::insert(&self.root, key),
        }
    }

    /// Returns a set containing every key of this set except `key`. Removing a key that does not
    /// exist returns a set sharing the root of this set.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new().insert(1);
    /// assert!(!set.remove(&1).contains(&1));
    /// assert!(set.remove(&2).contains(&1));
    /// ```
    pub fn remove<V>(&self, key: &V) -> Self
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackSet {
            root: tree::delete(&self.root, key),
        }
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_rbtree::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new().insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::contains(&self.root, key)
    }

    /// Returns `true` if the underlying tree satisfies every red black invariant.
    pub fn is_valid(&self) -> bool {
        tree::is_valid(&self.root)
    }
}

impl<T> Clone for RedBlackSet<T> {
    fn clone(&self) -> Self {
        RedBlackSet {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.root = tree::insert(&self.root, key);
        }
    }
}

impl<T> PartialEq for RedBlackSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &RedBlackSet<T>) -> bool {
        self.keys() == other.keys()
    }
}

impl<T> Eq for RedBlackSet<T> where T: Ord {}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

impl<T> Serialize for RedBlackSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.keys())
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = Vec::<T>::deserialize(deserializer)?;
        Ok(keys.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::rc::Rc;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
        assert!(set.is_valid());
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let set = RedBlackSet::new().insert(1);
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_existing() {
        let set = RedBlackSet::new().insert(1);
        let same = set.insert(1);
        assert!(Rc::ptr_eq(set.root(), same.root()));
    }

    #[test]
    fn test_remove() {
        let set = RedBlackSet::new().insert(1);
        let removed = set.remove(&1);
        assert!(!removed.contains(&1));
        assert!(removed.is_empty());
        assert!(set.contains(&1));
    }

    #[test]
    fn test_remove_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        let removed = set.remove(&1);
        assert!(removed.is_empty());
        assert!(removed.is_valid());
        assert!(Rc::ptr_eq(set.root(), removed.root()));
    }

    #[test]
    fn test_remove_absent() {
        let set = RedBlackSet::new().insert(1);
        let same = set.remove(&2);
        assert!(Rc::ptr_eq(set.root(), same.root()));
    }

    #[test]
    fn test_borrowed_key() {
        let set = RedBlackSet::new().insert(String::from("a"));
        assert!(set.contains("a"));
        assert!(set.remove("a").is_empty());
    }

    #[test]
    fn test_min_max() {
        let set: RedBlackSet<u32> = vec![3, 1, 5].into_iter().collect();
        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_eq_independent_of_shape() {
        let ascending: RedBlackSet<u32> = (0..10).collect();
        let descending: RedBlackSet<u32> = (0..10).rev().collect();
        assert_eq!(ascending, descending);
        assert_ne!(ascending, descending.remove(&4));
    }

    #[test]
    fn test_debug() {
        let set: RedBlackSet<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }

    #[test]
    fn test_serde_tokens() {
        let set: RedBlackSet<u32> = vec![3, 1, 2].into_iter().collect();
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_unsorted() {
        let set: RedBlackSet<u32> = vec![1, 2, 3].into_iter().collect();
        assert_de_tokens(
            &set,
            &[
                Token::Seq { len: Some(4) },
                Token::U32(3),
                Token::U32(1),
                Token::U32(3),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
