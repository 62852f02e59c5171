use std::borrow::Cow;

/// Trait for read access to record-like values with named fields.
///
/// Differs from [`BDictAccess`](crate::access::dict::BDictAccess) only in how
/// pairs are obtained: field names come from a fixed schema and are always
/// strings. The encoder still sorts them and rejects duplicates.
pub trait BRecordAccess<V> {
    /// Convert the record to a list of field name/value pairs, in schema order.
    fn to_list(&self) -> Vec<(&str, &V)>;
}

impl<V> BRecordAccess<V> for Vec<(Cow<'_, str>, V)> {
    fn to_list(&self) -> Vec<(&str, &V)> {
        self.iter().map(|(name, value)| (name.as_ref(), value)).collect()
    }
}
