use crate::access::dict::BDictAccess;
use crate::access::list::BListAccess;
use crate::access::record::BRecordAccess;
use crate::value::big_int::BigInt;

/// Classification of a value into one of the encodable structural kinds.
///
/// Container variants carry a read-only iteration capability; the encoder
/// never mutates the value it is handed.
pub enum ValueKind<'a, V> {
    /// Boolean, encoded as the integers `1` and `0`.
    Bool(bool),
    /// Integer within the signed 64-bit range.
    Int(i64),
    /// Integer of arbitrary magnitude.
    BigInt(&'a BigInt),
    /// Raw byte string.
    Bytes(&'a [u8]),
    /// Text string, measured and written in its UTF-8 form.
    Text(&'a str),
    /// Ordered sequence of values.
    List(&'a dyn BListAccess<V>),
    /// Unordered key/value pairs; keys are themselves values.
    Dict(&'a dyn BDictAccess<V>),
    /// Named fields from a fixed schema.
    Record(&'a dyn BRecordAccess<V>),
    /// A kind with no bencode representation; carries the host type name.
    Unsupported(&'a str),
}

impl<'a, V> ValueKind<'a, V> {
    /// Name of the classified kind, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool(_) => "bool",
            ValueKind::Int(_) | ValueKind::BigInt(_) => "integer",
            ValueKind::Bytes(_) => "bytes",
            ValueKind::Text(_) => "text",
            ValueKind::List(_) => "list",
            ValueKind::Dict(_) => "dict",
            ValueKind::Record(_) => "record",
            ValueKind::Unsupported(_) => "unsupported",
        }
    }
}

/// Trait for classifying a host value for encoding.
///
/// Implementing this trait is how a host representation plugs into the
/// encoder: [`kind`](BValueAccess::kind) must return exactly one variant for
/// any value, with [`ValueKind::Unsupported`] as the total fallback. The
/// encoder treats the classification as authoritative.
pub trait BValueAccess: Sized {
    /// Type of the values nested inside containers of this value.
    type BType: BValueAccess;

    /// Classify the value as a `ValueKind`.
    fn kind(&self) -> ValueKind<'_, Self::BType>;
}

impl<'a, T> BValueAccess for &'a T
where
    T: BValueAccess,
{
    type BType = T::BType;

    fn kind(&self) -> ValueKind<'_, Self::BType> {
        (*self).kind()
    }
}
