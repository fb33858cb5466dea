//! Writing a [`Tag`] tree as NBT.
//!
//! ```
//! use nbtree::{to_bytes, Tag};
//!
//! let bytes = to_bytes(&Tag::anonymous("AB")).unwrap();
//! assert_eq!(bytes, [8, 0, 0, 0, 2, b'A', b'B']);
//! ```
//!
//! Lists are written without the elements whose kind differs from the
//! list's declared kind. This is not an error, the in-memory list is left
//! as it was.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, trace};

use crate::codec::{WriteNbt, MAX_DEPTH};
use crate::error::{Error, Result};
use crate::{Compound, Kind, List, Tag, Value};

/// Write one complete tag: kind identifier, name, then payload.
///
/// Trees with Lists and Compounds nested more than 512 levels deep are
/// refused with
/// [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind::DepthLimitExceeded),
/// the same limit reading applies.
pub fn write_tag<W: Write>(writer: &mut W, tag: &Tag) -> Result<()> {
    write_tag_at(writer, tag, 0)
}

/// Write a tag into a new buffer.
pub fn to_bytes(tag: &Tag) -> Result<Vec<u8>> {
    trace!("writing tag {:?} of kind {}", tag.name(), tag.kind());
    let mut buf = Vec::new();
    write_tag(&mut buf, tag)?;
    Ok(buf)
}

/// Write only the payload of a value, with no identifier or name.
pub fn write_payload<W: Write>(writer: &mut W, value: &Value) -> Result<()> {
    write_payload_at(writer, value, 0)
}

fn write_tag_at<W: Write>(writer: &mut W, tag: &Tag, depth: usize) -> Result<()> {
    writer.write_kind(tag.kind())?;
    writer.write_size_prefixed_str(tag.name())?;
    write_payload_at(writer, tag.value(), depth)
}

fn write_payload_at<W: Write>(writer: &mut W, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Byte(v) => writer.write_i8(*v)?,
        Value::Short(v) => writer.write_i16::<BigEndian>(*v)?,
        Value::Int(v) => writer.write_i32::<BigEndian>(*v)?,
        Value::Long(v) => writer.write_i64::<BigEndian>(*v)?,
        Value::Float(v) => writer.write_f32::<BigEndian>(*v)?,
        Value::Double(v) => writer.write_f64::<BigEndian>(*v)?,
        Value::ByteArray(v) => {
            writer.write_len("byte array", v.len())?;
            let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
            writer.write_all(&bytes)?;
        }
        Value::String(v) => writer.write_size_prefixed_str(v)?,
        Value::List(_) | Value::Compound(_) if depth >= MAX_DEPTH => {
            return Err(Error::depth_limit());
        }
        Value::List(v) => write_list(writer, v, depth)?,
        Value::Compound(v) => write_compound(writer, v, depth)?,
        Value::IntArray(v) => {
            writer.write_len("int array", v.len())?;
            for i in v {
                writer.write_i32::<BigEndian>(*i)?;
            }
        }
    }
    Ok(())
}

fn write_list<W: Write>(writer: &mut W, list: &List, depth: usize) -> Result<()> {
    let purged: Vec<&Value> = list.purged().collect();
    if purged.len() != list.len() {
        debug!(
            "dropping {} element(s) not of kind {} from list",
            list.len() - purged.len(),
            list.of()
        );
    }

    writer.write_kind(list.of())?;
    writer.write_len("list", purged.len())?;
    for value in purged {
        write_payload_at(writer, value, depth + 1)?;
    }
    Ok(())
}

fn write_compound<W: Write>(writer: &mut W, compound: &Compound, depth: usize) -> Result<()> {
    for child in compound {
        write_tag_at(writer, child, depth + 1)?;
    }
    // The End sentinel has no name and no payload.
    writer.write_kind(Kind::End)
}
