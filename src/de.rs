//! Reading NBT into a [`Tag`] tree.
//!
//! A tag on the wire is its kind identifier, its name as a length prefixed
//! string, then the payload for that kind. [`read_tag`] reads one such tag
//! from any [`Read`], recursing into Lists and Compounds, and materializes
//! the whole tree before returning.
//!
//! ```
//! use nbtree::{de::from_bytes, Value};
//!
//! // Compound "" { Byte "x": 5 }
//! let input = [10, 0, 0, 1, 0, 1, b'x', 5, 0];
//! let root = from_bytes(&input[..]).unwrap();
//!
//! let x = root.value().as_compound().unwrap().get("x").unwrap();
//! assert_eq!(x.value(), &Value::Byte(5));
//! ```
//!
//! Any failure aborts the whole read. No partially built tree is ever
//! returned. Lists and Compounds nested more than 512 levels deep fail with
//! [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind::DepthLimitExceeded).

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::trace;

use crate::codec::{ReadNbt, MAX_DEPTH, MAX_PREALLOC};
use crate::error::{Error, Result};
use crate::{Compound, Kind, List, Tag, Value};

/// Read one complete tag, including its kind identifier and name.
pub fn read_tag<R: Read>(reader: &mut R) -> Result<Tag> {
    let id = reader.read_id()?;
    read_tag_after_id(reader, id, 0)
}

/// Read a tag from a byte slice. Bytes after the tag are ignored.
pub fn from_bytes(mut input: &[u8]) -> Result<Tag> {
    read_tag(&mut input)
}

/// Read a tag that must be a Compound, as is the case at the root of every
/// NBT file.
pub fn read_root<R: Read>(reader: &mut R) -> Result<Tag> {
    let id = reader.read_id()?;
    trace!("reading root tag of kind {}", id);
    if id != Kind::Compound.id() {
        return Err(Error::no_root_compound(id));
    }
    read_tag_after_id(reader, id, 0)
}

/// Like [`read_root`] for a byte slice.
pub fn from_bytes_root(mut input: &[u8]) -> Result<Tag> {
    read_root(&mut input)
}

/// Read the payload of a tag of the given kind, leaving it unnamed. This is
/// the form List elements take on the wire.
pub fn read_payload<R: Read>(reader: &mut R, kind: Kind) -> Result<Value> {
    read_payload_at(reader, kind, 0)
}

// `depth` is the number of Lists and Compounds enclosing this payload.
fn read_payload_at<R: Read>(reader: &mut R, kind: Kind, depth: usize) -> Result<Value> {
    Ok(match kind {
        Kind::Byte => Value::Byte(reader.read_i8()?),
        Kind::Short => Value::Short(reader.read_i16::<BigEndian>()?),
        Kind::Int => Value::Int(reader.read_i32::<BigEndian>()?),
        Kind::Long => Value::Long(reader.read_i64::<BigEndian>()?),
        Kind::Float => Value::Float(reader.read_f32::<BigEndian>()?),
        Kind::Double => Value::Double(reader.read_f64::<BigEndian>()?),
        Kind::ByteArray => {
            let len = reader.read_len("byte array")?;
            Value::ByteArray(reader.read_i8_array(len)?)
        }
        Kind::String => Value::String(reader.read_size_prefixed_string()?),
        Kind::List | Kind::Compound if depth >= MAX_DEPTH => {
            return Err(Error::depth_limit());
        }
        Kind::List => Value::List(read_list(reader, depth)?),
        Kind::Compound => Value::Compound(read_compound(reader, depth)?),
        Kind::IntArray => {
            let len = reader.read_len("int array")?;
            Value::IntArray(reader.read_i32_array(len)?)
        }
        Kind::End => return Err(Error::unknown_kind(kind.id())),
    })
}

fn read_tag_after_id<R: Read>(reader: &mut R, id: u8, depth: usize) -> Result<Tag> {
    // Resolve before reading the name so an unknown kind fails on the
    // identifier alone.
    let kind = Kind::resolve(id)?;
    let name = reader.read_size_prefixed_string()?;
    let value = read_payload_at(reader, kind, depth)?;
    Ok(Tag::new(name, value))
}

fn read_list<R: Read>(reader: &mut R, depth: usize) -> Result<List> {
    let id = reader.read_i8()? as u8;
    let of = Kind::try_from(id).map_err(|_| Error::unknown_kind(id))?;
    let len = reader.read_len("list")?;

    // End is only meaningful as the type of an empty list.
    if of == Kind::End && len > 0 {
        return Err(Error::unknown_kind(id));
    }

    let mut elements = Vec::with_capacity(len.min(MAX_PREALLOC));
    for _ in 0..len {
        elements.push(read_payload_at(reader, of, depth + 1)?);
    }
    Ok(List::with_elements(of, elements))
}

fn read_compound<R: Read>(reader: &mut R, depth: usize) -> Result<Compound> {
    let mut compound = Compound::new();
    loop {
        // Running out of input here means the End was never seen.
        let id = reader.read_id()?;
        if id == Kind::End.id() {
            return Ok(compound);
        }
        compound.insert(read_tag_after_id(reader, id, depth + 1)?);
    }
}
