use std::str::FromStr;
use std::thread;

use bencode_canonical::{
    ben_bytes, ben_int, ben_list, ben_map, ben_text, encode, BListAccess, BRecordAccess, BValueAccess, BencodeValue,
    BigInt, EncodeError, ValueKind,
};

#[test]
fn positive_ben_map_macro() {
    let result = (ben_map! {
        "key" => ben_bytes!("value")
    })
    .encode()
    .unwrap();

    assert_eq!("d3:key5:valuee".as_bytes(), &result[..]); // cspell:disable-line
}

#[test]
fn positive_ben_list_macro() {
    let result = (ben_list!(ben_int!(5))).encode().unwrap();

    assert_eq!("li5ee".as_bytes(), &result[..]); // cspell:disable-line
}

#[test]
fn positive_keys_sorted_byte_lexicographically() {
    let result = (ben_map! {
        "b" => ben_int!(1),
        "a" => ben_int!(2)
    })
    .encode()
    .unwrap();

    assert_eq!("d1:ai2e1:bi1ee".as_bytes(), &result[..]); // cspell:disable-line
}

#[test]
fn positive_encoding_is_order_independent() {
    let first = (ben_map! {
        "alpha" => ben_int!(1),
        "beta" => ben_int!(2),
        "gamma" => ben_int!(3)
    })
    .encode()
    .unwrap();

    let second = (ben_map! {
        "gamma" => ben_int!(3),
        "alpha" => ben_int!(1),
        "beta" => ben_int!(2)
    })
    .encode()
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn positive_encoding_is_deterministic() {
    let value = ben_map! {
        "nested" => ben_list!(ben_int!(1), ben_text!("two")),
        "flag" => BencodeValue::new_bool(true)
    };

    assert_eq!(value.encode().unwrap(), value.encode().unwrap());
}

#[test]
fn positive_text_length_is_utf8_byte_count() {
    let result = (ben_text!("héllo wörld")).encode().unwrap();

    // 11 characters, 13 bytes once encoded as UTF-8
    assert_eq!("13:héllo wörld".as_bytes(), &result[..]);
}

#[test]
fn positive_empty_containers() {
    assert_eq!(b"le".as_slice(), &BencodeValue::new_list().encode().unwrap()[..]);
    assert_eq!(b"de".as_slice(), &BencodeValue::new_dict().encode().unwrap()[..]);
}

#[test]
fn positive_int_fast_path_boundary() {
    let result = (ben_int!(i64::MAX)).encode().unwrap();

    assert_eq!(b"i9223372036854775807e".as_slice(), &result[..]);
}

#[test]
fn positive_big_int_slow_path_boundary() {
    // one past i64::MAX forces the arbitrary-precision path
    let just_past = BencodeValue::new_big_int(BigInt::from_str("9223372036854775808").unwrap());

    assert_eq!(b"i9223372036854775808e".as_slice(), &just_past.encode().unwrap()[..]);
}

#[test]
fn positive_paths_agree_on_shared_range() {
    let fast = (ben_int!(i64::MAX)).encode().unwrap();
    let slow = BencodeValue::new_big_int(BigInt::from(9_223_372_036_854_775_807_u64))
        .encode()
        .unwrap();

    assert_eq!(fast, slow);
}

#[test]
fn negative_duplicate_keys_rejected() {
    let result = (ben_map! {
        "x" => ben_int!(1),
        "x" => ben_int!(2)
    })
    .encode();

    assert_eq!(Err(EncodeError::DuplicateKey(b"x".to_vec())), result);
}

#[test]
fn negative_text_and_bytes_keys_compared_by_bytes() {
    let mut dict = BencodeValue::new_dict();
    {
        let dict_mut = dict.dict_mut().unwrap();
        dict_mut.push((ben_text!("spam"), ben_int!(1)));
        dict_mut.push((ben_bytes!(&b"spam"[..]), ben_int!(2)));
    }

    assert_eq!(Err(EncodeError::DuplicateKey(b"spam".to_vec())), dict.encode());
}

#[test]
fn negative_non_string_key_rejected() {
    let mut dict = BencodeValue::new_dict();
    {
        let dict_mut = dict.dict_mut().unwrap();
        dict_mut.push((ben_int!(9), ben_int!(1)));
    }

    assert_eq!(Err(EncodeError::InvalidKeyType { found: "integer" }), dict.encode());
}

struct Opaque;

impl BValueAccess for Opaque {
    type BType = Opaque;

    fn kind(&self) -> ValueKind<'_, Opaque> {
        ValueKind::Unsupported("socket")
    }
}

#[test]
fn negative_unsupported_kind_rejected() {
    assert_eq!(Err(EncodeError::UnsupportedType("socket".to_owned())), encode(&Opaque));
}

/// A list whose only element is itself.
struct Cyclic;

impl BValueAccess for Cyclic {
    type BType = Cyclic;

    fn kind(&self) -> ValueKind<'_, Cyclic> {
        ValueKind::List(self)
    }
}

impl BListAccess<Cyclic> for Cyclic {
    fn get(&self, index: usize) -> Option<&Cyclic> {
        (index == 0).then_some(self)
    }

    fn len(&self) -> usize {
        1
    }
}

#[test]
fn negative_self_referential_list_detected() {
    // traversal of the cycle drives depth past the 1000 activation point,
    // where identity tracking reports the re-entry instead of recursing
    // until the native stack is exhausted
    assert_eq!(Err(EncodeError::CircularReference), encode(&Cyclic));
}

/// An acyclic chain of single-element lists, `levels` deep.
enum Deep {
    Leaf,
    Nest(Box<Deep>),
}

impl Deep {
    fn with_levels(levels: usize) -> Deep {
        let mut deep = Deep::Leaf;
        for _ in 0..levels {
            deep = Deep::Nest(Box::new(deep));
        }
        deep
    }
}

impl BValueAccess for Deep {
    type BType = Deep;

    fn kind(&self) -> ValueKind<'_, Deep> {
        match self {
            Deep::Leaf => ValueKind::Int(0),
            Deep::Nest(_) => ValueKind::List(self),
        }
    }
}

impl BListAccess<Deep> for Deep {
    fn get(&self, index: usize) -> Option<&Deep> {
        match self {
            Deep::Leaf => None,
            Deep::Nest(inner) => (index == 0).then_some(&**inner),
        }
    }

    fn len(&self) -> usize {
        match self {
            Deep::Leaf => 0,
            Deep::Nest(_) => 1,
        }
    }
}

#[test]
fn positive_deep_acyclic_structure_past_threshold() {
    let levels = 2000;
    let result = encode(&Deep::with_levels(levels)).unwrap();

    // l…li0ee…e with one l/e pair per level
    assert_eq!(2 * levels + 3, result.len());
    assert!(result.starts_with(b"ll"));
    assert!(result.ends_with(b"i0eee"));
}

/// A host view whose list elements are borrowed from elsewhere.
struct Borrowed<'a> {
    items: Vec<&'a BencodeValue<'a>>,
}

impl<'a> BValueAccess for Borrowed<'a> {
    type BType = &'a BencodeValue<'a>;

    fn kind(&self) -> ValueKind<'_, &'a BencodeValue<'a>> {
        ValueKind::List(&self.items)
    }
}

#[test]
fn positive_borrowed_elements_encoded_in_order() {
    let one = ben_int!(1);
    let two = ben_text!("two");
    let view = Borrowed { items: vec![&one, &two] };

    assert_eq!(b"li1e3:twoe".as_slice(), &encode(&view).unwrap()[..]); // cspell:disable-line
}

/// A record with a fixed two-field schema.
struct FileInfo<'a> {
    length: BencodeValue<'a>,
    name: BencodeValue<'a>,
}

impl<'a> BValueAccess for FileInfo<'a> {
    type BType = BencodeValue<'a>;

    fn kind(&self) -> ValueKind<'_, BencodeValue<'a>> {
        ValueKind::Record(self)
    }
}

impl<'a> BRecordAccess<BencodeValue<'a>> for FileInfo<'a> {
    fn to_list(&self) -> Vec<(&str, &BencodeValue<'a>)> {
        vec![("name", &self.name), ("length", &self.length)]
    }
}

#[test]
fn positive_record_fields_encoded_sorted() {
    let info = FileInfo {
        length: ben_int!(1024),
        name: ben_text!("file.bin"),
    };

    let result = encode(&info).unwrap();

    assert_eq!(b"d6:lengthi1024e4:name8:file.bine".as_slice(), &result[..]); // cspell:disable-line
}

/// Schema pathologically repeating a field name.
struct BrokenRecord<'a> {
    field: BencodeValue<'a>,
}

impl<'a> BValueAccess for BrokenRecord<'a> {
    type BType = BencodeValue<'a>;

    fn kind(&self) -> ValueKind<'_, BencodeValue<'a>> {
        ValueKind::Record(self)
    }
}

impl<'a> BRecordAccess<BencodeValue<'a>> for BrokenRecord<'a> {
    fn to_list(&self) -> Vec<(&str, &BencodeValue<'a>)> {
        vec![("x", &self.field), ("x", &self.field)]
    }
}

#[test]
fn negative_duplicate_record_fields_rejected() {
    let record = BrokenRecord { field: ben_int!(1) };

    assert_eq!(Err(EncodeError::DuplicateKey(b"x".to_vec())), encode(&record));
}

#[test]
fn positive_concurrent_encodes_share_the_pool() {
    let expected = (ben_map! {
        "list" => ben_list!(ben_int!(1), ben_int!(2), ben_int!(3)),
        "name" => ben_text!("concurrent")
    })
    .encode()
    .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let result = (ben_map! {
                        "list" => ben_list!(ben_int!(1), ben_int!(2), ben_int!(3)),
                        "name" => ben_text!("concurrent")
                    })
                    .encode()
                    .unwrap();

                    assert_eq!(expected, result);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
