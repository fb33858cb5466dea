use crate::{Kind, List, Value};


mod builder;

/// A List nested `levels` deep, counting itself. The innermost is an empty
/// List of End.
fn nested_lists(levels: usize) -> Value {
    let mut value = Value::List(List::new(Kind::End));
    for _ in 1..levels {
        let mut list = List::new(Kind::List);
        list.push(value);
        value = Value::List(list);
    }
    value
}

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Kind::$kind), $val);
            assert_eq!(Kind::try_from($val as u8), Ok(Kind::$kind));
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
    }

    for value in 12..=u8::MAX {
        assert!(Kind::try_from(value).is_err())
    }
}

#[test]
fn resolve_rejects_end_and_unknown() {
    assert!(Kind::resolve(0).is_err());
    assert!(Kind::resolve(12).is_err());
    assert!(Kind::resolve(99).is_err());
    assert_eq!(Kind::resolve(10).unwrap(), Kind::Compound);
}
