/// Trait for read access to generic map data structures.
///
/// Pairs are exposed in whatever order the host structure holds them; the
/// encoder sorts them canonically itself. Keys are values rather than raw
/// bytes so that a key of the wrong kind can be detected and reported
/// instead of being unrepresentable.
pub trait BDictAccess<V> {
    /// Convert the dictionary to an unordered list of key/value pairs.
    fn to_list(&self) -> Vec<(&V, &V)>;

    /// Get the number of key/value pairs.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> BDictAccess<V> for Vec<(V, V)> {
    fn to_list(&self) -> Vec<(&V, &V)> {
        self.iter().map(|(k, v)| (k, v)).collect()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
