/// Trait for read access to generic list data structures.
pub trait BListAccess<V> {
    /// Get a list element at the given index.
    fn get(&self, index: usize) -> Option<&V>;

    /// Get the length of the list.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, V: 'a> IntoIterator for &'a dyn BListAccess<V> {
    type Item = &'a V;
    type IntoIter = BListIter<'a, V>;

    fn into_iter(self) -> BListIter<'a, V> {
        BListIter { index: 0, access: self }
    }
}

pub struct BListIter<'a, V> {
    index: usize,
    access: &'a dyn BListAccess<V>,
}

impl<'a, V> Iterator for BListIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let opt_next = self.access.get(self.index);

        if opt_next.is_some() {
            self.index += 1;
        }

        opt_next
    }
}

impl<V> BListAccess<V> for Vec<V> {
    fn get(&self, index: usize) -> Option<&V> {
        self[..].get(index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
