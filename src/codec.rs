use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::Kind;

// Upper bound on what is reserved up front for a declared length. Lengths
// come from untrusted input, the rest grows as elements actually arrive.
pub(crate) const MAX_PREALLOC: usize = 4096;

// Deepest nesting of Lists and Compounds that is read, written or rendered.
// Each level is a stack frame, so this bounds the recursion.
pub(crate) const MAX_DEPTH: usize = 512;

pub(crate) trait ReadNbt: Read {
    fn read_id(&mut self) -> Result<u8> {
        Ok(self.read_u8()?)
    }

    /// Read a length prefixed string. The prefix is an unsigned count of
    /// encoded bytes, exactly that many are consumed.
    fn read_size_prefixed_string(&mut self) -> Result<String> {
        let len = self.read_u16::<BigEndian>()? as usize;
        let buf = self.read_bytes(len)?;

        Ok(cesu8::from_java_cesu8(&buf[..])
            .map_err(|_| Error::nonunicode(&buf[..]))?
            .into_owned())
    }

    /// Read a 32-bit length field, rejecting negative values.
    fn read_len(&mut self, what: &str) -> Result<usize> {
        let len = self.read_i32::<BigEndian>()?;
        if len < 0 {
            return Err(Error::malformed_length(what, len as i64));
        }
        Ok(len as usize)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        let read = (&mut *self).take(len as u64).read_to_end(&mut buf)?;
        if read != len {
            return Err(Error::truncated());
        }
        Ok(buf)
    }

    fn read_i8_array(&mut self, len: usize) -> Result<Vec<i8>> {
        Ok(self.read_bytes(len)?.into_iter().map(|b| b as i8).collect())
    }

    fn read_i32_array(&mut self, len: usize) -> Result<Vec<i32>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            buf.push(self.read_i32::<BigEndian>()?);
        }
        Ok(buf)
    }
}

impl<T> ReadNbt for T where T: Read + ?Sized {}

pub(crate) trait WriteNbt: Write {
    fn write_kind(&mut self, kind: Kind) -> Result<()> {
        self.write_u8(kind.id())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let s = cesu8::to_java_cesu8(s);
        let len: u16 = s
            .len()
            .try_into()
            .map_err(|_| Error::malformed_length("string", s.len() as i64))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&s)?;
        Ok(())
    }

    fn write_len(&mut self, what: &str, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::malformed_length(what, len as i64))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write + ?Sized {}
