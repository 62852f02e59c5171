use std::borrow::Cow;

use crate::access::value::{BValueAccess, ValueKind};
use crate::encode;
use crate::error::EncodeResult;
use crate::value::big_int::BigInt;

/// Storage for each structural kind.
///
/// Dictionaries and records are held as pair lists in insertion order rather
/// than as sorted maps: canonical ordering and duplicate rejection are the
/// encoder's job, and a sorted map would silently merge duplicates before
/// the encoder could report them.
#[derive(Debug, Eq, PartialEq, Clone)]
enum Inner<'a> {
    /// Boolean, encoded as a bencode integer.
    Bool(bool),
    /// Bencode Integer.
    Int(i64),
    /// Bencode Integer beyond the signed 64-bit range.
    BigInt(BigInt),
    /// Bencode Bytes.
    Bytes(Cow<'a, [u8]>),
    /// Bencode Bytes sourced from UTF-8 text.
    Text(Cow<'a, str>),
    /// Bencode List.
    List(Vec<BencodeValue<'a>>),
    /// Bencode Dictionary.
    Dict(Vec<(BencodeValue<'a>, BencodeValue<'a>)>),
    /// Bencode Dictionary sourced from named fields.
    Record(Vec<(Cow<'a, str>, BencodeValue<'a>)>),
}

/// `BencodeValue` object that owns a tree of encodable data.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct BencodeValue<'a> {
    inner: Inner<'a>,
}

impl<'a> BencodeValue<'a> {
    fn new(inner: Inner<'a>) -> BencodeValue<'a> {
        BencodeValue { inner }
    }

    /// Create a new `BencodeValue` representing a `bool`.
    #[must_use]
    pub fn new_bool(value: bool) -> BencodeValue<'a> {
        BencodeValue::new(Inner::Bool(value))
    }

    /// Create a new `BencodeValue` representing an `i64`.
    #[must_use]
    pub fn new_int(value: i64) -> BencodeValue<'a> {
        BencodeValue::new(Inner::Int(value))
    }

    /// Create a new `BencodeValue` representing a [`BigInt`].
    #[must_use]
    pub fn new_big_int(value: BigInt) -> BencodeValue<'a> {
        BencodeValue::new(Inner::BigInt(value))
    }

    /// Create a new `BencodeValue` representing a `[u8]`.
    #[must_use]
    pub fn new_bytes(value: Cow<'a, [u8]>) -> BencodeValue<'a> {
        BencodeValue::new(Inner::Bytes(value))
    }

    /// Create a new `BencodeValue` representing a `str`.
    #[must_use]
    pub fn new_text<T>(value: T) -> BencodeValue<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        BencodeValue::new(Inner::Text(value.into()))
    }

    /// Create a new `BencodeValue` representing an empty list.
    #[must_use]
    pub fn new_list() -> BencodeValue<'a> {
        BencodeValue::new(Inner::List(Vec::new()))
    }

    /// Create a new `BencodeValue` representing an empty dictionary.
    #[must_use]
    pub fn new_dict() -> BencodeValue<'a> {
        BencodeValue::new(Inner::Dict(Vec::new()))
    }

    /// Create a new `BencodeValue` representing a record with no fields.
    #[must_use]
    pub fn new_record() -> BencodeValue<'a> {
        BencodeValue::new(Inner::Record(Vec::new()))
    }

    /// Attempt to access the list elements mutably.
    pub fn list_mut(&mut self) -> Option<&mut Vec<BencodeValue<'a>>> {
        match self.inner {
            Inner::List(ref mut n) => Some(n),
            _ => None,
        }
    }

    /// Attempt to access the dictionary pairs mutably.
    ///
    /// Pairs keep their insertion order; sorting and duplicate detection
    /// happen during encoding.
    pub fn dict_mut(&mut self) -> Option<&mut Vec<(BencodeValue<'a>, BencodeValue<'a>)>> {
        match self.inner {
            Inner::Dict(ref mut n) => Some(n),
            _ => None,
        }
    }

    /// Attempt to access the record fields mutably.
    pub fn record_mut(&mut self) -> Option<&mut Vec<(Cow<'a, str>, BencodeValue<'a>)>> {
        match self.inner {
            Inner::Record(ref mut n) => Some(n),
            _ => None,
        }
    }

    /// Encode the `BencodeValue` into a buffer holding the canonical bencode.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::EncodeError`] when a dictionary key is not a
    /// string, keys are duplicated, a self-referential structure is detected
    /// or the output buffer cannot grow.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        encode::encode(self)
    }
}

impl<'a> BValueAccess for BencodeValue<'a> {
    type BType = BencodeValue<'a>;

    fn kind(&self) -> ValueKind<'_, BencodeValue<'a>> {
        match self.inner {
            Inner::Bool(n) => ValueKind::Bool(n),
            Inner::Int(n) => ValueKind::Int(n),
            Inner::BigInt(ref n) => ValueKind::BigInt(n),
            Inner::Bytes(ref n) => ValueKind::Bytes(n.as_ref()),
            Inner::Text(ref n) => ValueKind::Text(n.as_ref()),
            Inner::List(ref n) => ValueKind::List(n),
            Inner::Dict(ref n) => ValueKind::Dict(n),
            Inner::Record(ref n) => ValueKind::Record(n),
        }
    }
}
