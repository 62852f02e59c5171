pub mod bencode_value;
pub mod big_int;
