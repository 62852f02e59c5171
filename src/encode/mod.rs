mod buffer;
mod context;
mod pool;

use crate::access::dict::BDictAccess;
use crate::access::list::BListAccess;
use crate::access::record::BRecordAccess;
use crate::access::value::{BValueAccess, ValueKind};
use crate::encode::context::EncodeContext;
use crate::error::{EncodeError, EncodeResult};
use crate::value::big_int::BigInt;

/// Encode a value into its canonical bencode representation.
///
/// Canonical means two semantically equal values always produce
/// byte-identical output: dictionary pairs are emitted sorted by their key
/// bytes regardless of the order the source structure holds them in, and
/// every integer has exactly one decimal form.
///
/// The output buffer comes from a process-wide context pool, so repeated
/// calls do not pay for a fresh allocation each time.
///
/// # Errors
///
/// Fails with [`EncodeError::UnsupportedType`] when a value classifies as
/// [`ValueKind::Unsupported`], [`EncodeError::InvalidKeyType`] when a
/// dictionary key is not a byte or text string,
/// [`EncodeError::DuplicateKey`] when two keys in one dictionary or record
/// compare byte-equal, [`EncodeError::CircularReference`] when a container
/// is encountered twice on a deep recursion path, and
/// [`EncodeError::AllocationFailure`] when the output buffer cannot grow.
/// No partial output is ever returned.
pub fn encode<T>(value: &T) -> EncodeResult<Vec<u8>>
where
    T: BValueAccess,
{
    let mut ctx = pool::GLOBAL.checkout();

    let result = encode_value(&mut ctx, value).and_then(|()| ctx.buffer.to_bytes());

    pool::GLOBAL.release(ctx);

    result
}

fn encode_value<T>(ctx: &mut EncodeContext, value: &T) -> EncodeResult<()>
where
    T: BValueAccess,
{
    match value.kind() {
        ValueKind::Bool(true) => ctx.buffer.write_bytes(b"i1e"),
        ValueKind::Bool(false) => ctx.buffer.write_bytes(b"i0e"),
        ValueKind::Int(n) => encode_int(ctx, n),
        ValueKind::BigInt(n) => encode_big_int(ctx, n),
        ValueKind::Bytes(n) => encode_bytes(ctx, n),
        ValueKind::Text(n) => encode_bytes(ctx, n.as_bytes()),
        ValueKind::List(n) => ctx.enter_container(container_identity(n), |ctx| encode_list(ctx, n)),
        ValueKind::Dict(n) => ctx.enter_container(container_identity(n), |ctx| encode_dict(ctx, n)),
        ValueKind::Record(n) => ctx.enter_container(container_identity(n), |ctx| encode_record(ctx, n)),
        ValueKind::Unsupported(name) => Err(EncodeError::UnsupportedType(name.to_owned())),
    }
}

/// Identity key of a container on the active recursion path.
fn container_identity<T: ?Sized>(container: &T) -> usize {
    (container as *const T).cast::<()>() as usize
}

/// Fast path: the value fits in an `i64`, digits go straight to the buffer.
fn encode_int(ctx: &mut EncodeContext, value: i64) -> EncodeResult<()> {
    ctx.buffer.write_byte(crate::INT_START)?;
    ctx.buffer.write_decimal_i64(value)?;
    ctx.buffer.write_byte(crate::BEN_END)
}

/// Slow path: the stored representation is already canonical decimal.
fn encode_big_int(ctx: &mut EncodeContext, value: &BigInt) -> EncodeResult<()> {
    ctx.buffer.write_byte(crate::INT_START)?;
    ctx.buffer.write_bytes(value.as_str().as_bytes())?;
    ctx.buffer.write_byte(crate::BEN_END)
}

fn encode_bytes(ctx: &mut EncodeContext, bytes: &[u8]) -> EncodeResult<()> {
    ctx.buffer.write_length(bytes.len())?;
    ctx.buffer.write_byte(crate::BYTE_LEN_END)?;
    ctx.buffer.write_bytes(bytes)
}

fn encode_list<V>(ctx: &mut EncodeContext, list: &dyn BListAccess<V>) -> EncodeResult<()>
where
    V: BValueAccess,
{
    ctx.buffer.write_byte(crate::LIST_START)?;

    for item in list {
        encode_value(ctx, item)?;
    }

    ctx.buffer.write_byte(crate::BEN_END)
}

fn encode_dict<V>(ctx: &mut EncodeContext, dict: &dyn BDictAccess<V>) -> EncodeResult<()>
where
    V: BValueAccess,
{
    let mut pairs = Vec::with_capacity(dict.len());
    for (key, value) in dict.to_list() {
        pairs.push((key_bytes(key)?, value));
    }

    encode_sorted_pairs(ctx, pairs)
}

fn encode_record<V>(ctx: &mut EncodeContext, record: &dyn BRecordAccess<V>) -> EncodeResult<()>
where
    V: BValueAccess,
{
    let pairs = record
        .to_list()
        .into_iter()
        .map(|(name, value)| (name.as_bytes(), value))
        .collect();

    encode_sorted_pairs(ctx, pairs)
}

/// A dictionary key must reduce to its byte representation before sorting.
fn key_bytes<V>(key: &V) -> EncodeResult<&[u8]>
where
    V: BValueAccess,
{
    match key.kind() {
        ValueKind::Bytes(bytes) => Ok(bytes),
        ValueKind::Text(text) => Ok(text.as_bytes()),
        other => Err(EncodeError::InvalidKeyType { found: other.name() }),
    }
}

// Shared by dictionaries and records: sort the keys byte-lexicographically,
// reject byte-equal neighbors, then emit the pairs.
fn encode_sorted_pairs<V>(ctx: &mut EncodeContext, mut pairs: Vec<(&[u8], &V)>) -> EncodeResult<()>
where
    V: BValueAccess,
{
    pairs.sort_by(|&(a, _), &(b, _)| a.cmp(b));

    for window in pairs.windows(2) {
        if window[0].0 == window[1].0 {
            return Err(EncodeError::DuplicateKey(window[0].0.to_vec()));
        }
    }

    ctx.buffer.write_byte(crate::DICT_START)?;
    for (key, value) in pairs {
        encode_bytes(ctx, key)?;
        encode_value(ctx, value)?;
    }
    ctx.buffer.write_byte(crate::BEN_END)
}
