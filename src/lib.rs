//! nbtree is an owned tree model and binary codec for NBT (Named Binary Tag)
//! data, the format *Minecraft* uses to persist world state.
//!
//! * The tree is made of [`Tag`]s: a name plus a [`Value`].
//! * Aggregates are [`List`] (homogeneous, unnamed elements) and
//!   [`Compound`] (name-keyed children).
//! * For reading see [`de`], for writing see [`ser`].
//!
//! This crate does not deal with compression. NBT files are usually GZip
//! compressed, so decompress them before handing the bytes over:
//!
//! ```no_run
//! use flate2::read::GzDecoder;
//! use std::io::Read;
//!
//! let file = std::fs::File::open("level.dat").unwrap();
//! let mut decoder = GzDecoder::new(file);
//! let mut data = vec![];
//! decoder.read_to_end(&mut data).unwrap();
//!
//! let root = nbtree::de::from_bytes_root(data.as_slice()).unwrap();
//! println!("{}", root);
//! ```
//!
//! # Quick example
//!
//! ```
//! use nbtree::{Compound, Kind, List, Tag, Value};
//!
//! let mut pos = List::new(Kind::Double);
//! pos.push(Value::Double(1.5));
//! pos.push(Value::Double(64.0));
//!
//! let mut root = Compound::new();
//! root.insert(Tag::new("Health", 20i16));
//! root.insert(Tag::new("Pos", pos));
//!
//! let bytes = nbtree::to_bytes(&Tag::new("", root)).unwrap();
//! let back = nbtree::from_bytes(bytes.as_slice()).unwrap();
//! assert_eq!(back.value().as_compound().unwrap().len(), 2);
//! ```

use std::fmt;

pub mod de;
pub mod error;
pub mod ser;

mod codec;
mod compound;
mod display;
mod list;
mod value;

pub use compound::*;
pub use de::{from_bytes, read_tag};
pub use error::{Error, ErrorKind, Result};
pub use list::*;
pub use ser::{to_bytes, write_tag};
pub use value::*;

#[cfg(test)]
mod test;

/// The kind of an NBT tag. This does not carry the value or the name of the
/// data, it is the one byte identifier that precedes them on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Kind {
    /// Terminates a Compound. Never carries data.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Array of Byte (i8).
    ByteArray = 7,
    /// Length prefixed text.
    String = 8,
    /// Sequence of unnamed payloads sharing one kind.
    List = 9,
    /// Name-keyed collection of tags.
    Compound = 10,
    /// Array of Int (i32).
    IntArray = 11,
}

impl Kind {
    /// The identifier written on the wire for this kind.
    pub fn id(self) -> u8 {
        u8::from(self)
    }

    /// Resolve the kind of a data-bearing tag from its identifier.
    ///
    /// This is the lookup used wherever a payload is about to be decoded, so
    /// End is rejected here along with every identifier outside the known
    /// set: End never has a payload to decode.
    pub fn resolve(id: u8) -> Result<Kind> {
        match Kind::try_from(id) {
            Ok(Kind::End) | Err(_) => Err(Error::unknown_kind(id)),
            Ok(kind) => Ok(kind),
        }
    }
}

// Written out by hand, the set of kinds is fixed.
impl TryFrom<u8> for Kind {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, ()> {
        use Kind::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::End => "End",
            Kind::Byte => "Byte",
            Kind::Short => "Short",
            Kind::Int => "Int",
            Kind::Long => "Long",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::ByteArray => "Byte Array",
            Kind::String => "String",
            Kind::List => "List",
            Kind::Compound => "Compound",
            Kind::IntArray => "Int Array",
        };
        f.write_str(name)
    }
}
