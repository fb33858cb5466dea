//! Human readable rendering of a tree, one tag per line with nested
//! aggregates indented by a tab:
//!
//! ```text
//! Compound "":
//! {
//! 	Byte "x": 5,
//! 	List of Int "l":
//! 	[
//! 		Int: 1
//! 	]
//! }
//! ```
//!
//! Lists and Compounds nested more than 512 levels deep are not expanded,
//! their contents are shown as `...`.

use std::fmt;

use crate::codec::MAX_DEPTH;
use crate::{Tag, Value};

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, Some(self.name()), self.value(), 0)
    }
}

/// Renders like a List element, without a name.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, None, self, 0)
    }
}

// `depth` is both the indent of the current line and the number of
// aggregates enclosing `value`.
fn render(
    f: &mut fmt::Formatter<'_>,
    name: Option<&str>,
    value: &Value,
    depth: usize,
) -> fmt::Result {
    match value {
        Value::List(list) => write!(f, "List of {}", list.of())?,
        _ => write!(f, "{}", value.kind())?,
    }
    if let Some(name) = name {
        write!(f, " {:?}", name)?;
    }
    f.write_str(":")?;

    match value {
        Value::Byte(v) => write!(f, " {}", v),
        Value::Short(v) => write!(f, " {}", v),
        Value::Int(v) => write!(f, " {}", v),
        Value::Long(v) => write!(f, " {}", v),
        Value::Float(v) => write!(f, " {}", v),
        Value::Double(v) => write!(f, " {}", v),
        Value::String(v) => write!(f, " {:?}", v),
        Value::ByteArray(v) => array(f, v),
        Value::IntArray(v) => array(f, v),
        Value::List(_) | Value::Compound(_) if depth >= MAX_DEPTH => f.write_str(" ..."),
        Value::List(list) => {
            open(f, '[', depth)?;
            for (i, v) in list.iter().enumerate() {
                separate(f, i, depth + 1)?;
                render(f, None, v, depth + 1)?;
            }
            close(f, ']', depth)
        }
        Value::Compound(compound) => {
            open(f, '{', depth)?;
            for (i, t) in compound.iter().enumerate() {
                separate(f, i, depth + 1)?;
                render(f, Some(t.name()), t.value(), depth + 1)?;
            }
            close(f, '}', depth)
        }
    }
}

fn array<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str(" [")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

fn newline(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    f.write_str("\n")?;
    for _ in 0..depth {
        f.write_str("\t")?;
    }
    Ok(())
}

fn open(f: &mut fmt::Formatter<'_>, bracket: char, depth: usize) -> fmt::Result {
    newline(f, depth)?;
    write!(f, "{}", bracket)
}

fn separate(f: &mut fmt::Formatter<'_>, index: usize, depth: usize) -> fmt::Result {
    if index > 0 {
        f.write_str(",")?;
    }
    newline(f, depth)
}

fn close(f: &mut fmt::Formatter<'_>, bracket: char, depth: usize) -> fmt::Result {
    newline(f, depth)?;
    write!(f, "{}", bracket)
}
