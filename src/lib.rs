//! Library for canonically encoding values as bencode.
//!
//! Bencode is the deterministic, self-delimiting binary format used by
//! content-addressed protocols: every logical value has exactly one valid
//! byte representation, so equal values always hash and compare identically.
//! This crate implements the encoding direction only.
//!
//! # Examples
//!
//! Encoding a value tree built with the construction macros:
//!
//! ```rust
//!     #[macro_use]
//!     extern crate bencode_canonical;
//!
//!     fn main() {
//!         let message = (ben_map!{
//!             "lucky_number" => ben_int!(7),
//!             "lucky_string" => ben_bytes!("7")
//!         }).encode().unwrap();
//!
//!         let data = b"d12:lucky_numberi7e12:lucky_string1:7e"; // cspell:disable-line
//!         assert_eq!(&data[..], &message[..]);
//!     }
//! ```
//!
//! Dictionary keys are emitted in byte-lexicographic order regardless of
//! insertion order, and duplicate keys are rejected:
//!
//! ```rust
//!     #[macro_use]
//!     extern crate bencode_canonical;
//!
//!     use bencode_canonical::EncodeError;
//!
//!     fn main() {
//!         let sorted = (ben_map!{
//!             "b" => ben_int!(1),
//!             "a" => ben_int!(2)
//!         }).encode().unwrap();
//!         assert_eq!(b"d1:ai2e1:bi1ee".as_slice(), &sorted[..]); // cspell:disable-line
//!
//!         let duplicated = (ben_map!{
//!             "x" => ben_int!(1),
//!             "x" => ben_int!(2)
//!         }).encode();
//!         assert!(matches!(duplicated, Err(EncodeError::DuplicateKey(_))));
//!     }
//! ```
//!
//! Custom host types plug in through the [`BValueAccess`] classifier trait;
//! see its documentation for details.

mod access;
mod cow;
mod encode;
mod error;
mod value;

/// Traits for implementation functionality.
pub mod inner {
    pub use crate::cow::BCowConvert;
}

pub use crate::access::dict::BDictAccess;
pub use crate::access::list::BListAccess;
pub use crate::access::record::BRecordAccess;
pub use crate::access::value::{BValueAccess, ValueKind};
pub use crate::encode::encode;
pub use crate::error::{EncodeError, EncodeResult};
pub use crate::value::bencode_value::BencodeValue;
pub use crate::value::big_int::{BigInt, ParseBigIntError};

const BEN_END: u8 = b'e';
const DICT_START: u8 = b'd';
const LIST_START: u8 = b'l';
const INT_START: u8 = b'i';

const BYTE_LEN_END: u8 = b':';

/// Construct a `BencodeValue` dictionary by supplying string references as
/// keys and `BencodeValue` as values.
#[macro_export]
macro_rules! ben_map {
( $($key:expr => $val:expr),* ) => {
        {
            use $crate::inner::BCowConvert;
            use $crate::BencodeValue;

            let mut bencode_map = BencodeValue::new_dict();
            {
                let dict = bencode_map.dict_mut().unwrap();
                $(
                    dict.push((BencodeValue::new_bytes(BCowConvert::convert($key)), $val));
                )*
            }

            bencode_map
        }
    }
}

/// Construct a `BencodeValue` list by supplying a list of `BencodeValue` values.
#[macro_export]
macro_rules! ben_list {
    ( $($ben:expr),* ) => {
        {
            use $crate::BencodeValue;

            let mut bencode_list = BencodeValue::new_list();
            {
                let list = bencode_list.list_mut().unwrap();
                $(
                    list.push($ben);
                )*
            }

            bencode_list
        }
    }
}

/// Construct `BencodeValue` bytes by supplying a type convertible to `Vec<u8>`.
#[macro_export]
macro_rules! ben_bytes {
    ( $ben:expr ) => {{
        use $crate::inner::BCowConvert;
        use $crate::BencodeValue;

        BencodeValue::new_bytes(BCowConvert::convert($ben))
    }};
}

/// Construct a `BencodeValue` text string by supplying a type convertible to
/// `Cow<str>`.
#[macro_export]
macro_rules! ben_text {
    ( $ben:expr ) => {{
        use $crate::BencodeValue;

        BencodeValue::new_text($ben)
    }};
}

/// Construct a `BencodeValue` integer by supplying an `i64`.
#[macro_export]
macro_rules! ben_int {
    ( $ben:expr ) => {{
        use $crate::BencodeValue;

        BencodeValue::new_int($ben)
    }};
}
