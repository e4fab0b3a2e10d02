//! Building structural types from Rust types.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
    time::{Duration, SystemTime},
};

use crate::{PrimitiveKind, StructuralType};

/// Types that can describe their own shape.
///
/// Implemented for primitives, strings, collections, maps and smart pointers.
/// Implement it for your own structs to convert them:
///
/// ```
/// use gut_ir::{Describe, Field, StructType, StructuralType};
///
/// struct User {
///     name: String,
///     tags: Vec<String>,
/// }
///
/// impl Describe for User {
///     fn describe() -> StructuralType {
///         StructType::new("User")
///             .field(Field::of::<String>("Name").tag("name"))
///             .field(Field::of::<Vec<String>>("Tags").tag("tags,omitempty"))
///             .into()
///     }
/// }
///
/// assert!(User::describe().as_struct().is_some());
/// ```
///
/// Generic structs substitute their parameters through ordinary generics, so
/// the renderer only ever sees concrete instantiations.
pub trait Describe {
    fn describe() -> StructuralType;
}

/// A dynamically typed value, rendered as `any`.
pub struct AnyValue;

/// The well-known identifier type.
pub struct Uuid;

/// The well-known date/time type.
pub struct DateTime;

impl Describe for AnyValue {
    fn describe() -> StructuralType {
        StructuralType::any()
    }
}

impl Describe for Uuid {
    fn describe() -> StructuralType {
        StructuralType::uuid()
    }
}

impl Describe for DateTime {
    fn describe() -> StructuralType {
        StructuralType::date()
    }
}

impl Describe for SystemTime {
    fn describe() -> StructuralType {
        StructuralType::date()
    }
}

impl Describe for Duration {
    fn describe() -> StructuralType {
        StructuralType::duration()
    }
}

macro_rules! describe_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> StructuralType {
                    StructuralType::primitive(PrimitiveKind::$kind)
                }
            }
        )*
    };
}

describe_primitive! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Uint,
    f32 => Float32,
    f64 => Float64,
    char => String,
    str => String,
    String => String,
}

macro_rules! describe_transparent {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ty<T> {
                fn describe() -> StructuralType {
                    T::describe()
                }
            }
        )*
    };
}

describe_transparent!(Rc, Arc, RefCell);

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> StructuralType {
        StructuralType::optional(T::describe())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> StructuralType {
        StructuralType::optional(T::describe())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> StructuralType {
        StructuralType::optional(T::describe())
    }
}

macro_rules! describe_sequence {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Describe> Describe for $ty<T> {
                fn describe() -> StructuralType {
                    StructuralType::slice(T::describe())
                }
            }
        )*
    };
}

describe_sequence!(Vec, VecDeque, BTreeSet);

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe() -> StructuralType {
        StructuralType::slice(T::describe())
    }
}

impl<T: Describe> Describe for [T] {
    fn describe() -> StructuralType {
        StructuralType::slice(T::describe())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> StructuralType {
        StructuralType::slice(T::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> StructuralType {
        StructuralType::map(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> StructuralType {
        StructuralType::map(K::describe(), V::describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, StructType};

    struct Page<T> {
        _items: Vec<T>,
    }

    impl<T: Describe> Describe for Page<T> {
        fn describe() -> StructuralType {
            StructType::new("Page")
                .field(Field::of::<String>("Cursor").tag("cursor"))
                .field(Field::of::<T>("Items").tag("items"))
                .into()
        }
    }

    #[test]
    fn test_primitives() {
        assert_eq!(bool::describe(), StructuralType::bool());
        assert_eq!(String::describe(), StructuralType::string());
        assert_eq!(str::describe(), StructuralType::string());
        assert_eq!(
            u64::describe(),
            StructuralType::primitive(PrimitiveKind::Uint64)
        );
        assert_eq!(
            isize::describe(),
            StructuralType::primitive(PrimitiveKind::Int)
        );
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(
            Option::<String>::describe(),
            StructuralType::optional(StructuralType::string())
        );
        assert_eq!(Arc::<String>::describe(), StructuralType::string());
        assert_eq!(
            Vec::<i32>::describe(),
            StructuralType::slice(StructuralType::primitive(PrimitiveKind::Int32))
        );
        assert_eq!(
            <[u8; 4]>::describe(),
            StructuralType::slice(StructuralType::primitive(PrimitiveKind::Uint8))
        );
    }

    #[test]
    fn test_maps() {
        assert_eq!(
            HashMap::<String, BTreeMap<i32, String>>::describe(),
            StructuralType::map(
                StructuralType::string(),
                StructuralType::map(
                    StructuralType::primitive(PrimitiveKind::Int32),
                    StructuralType::string()
                )
            )
        );
    }

    #[test]
    fn test_well_known_markers() {
        assert_eq!(Uuid::describe(), StructuralType::uuid());
        assert_eq!(SystemTime::describe(), StructuralType::date());
        assert_eq!(Duration::describe(), StructuralType::duration());
        assert_eq!(AnyValue::describe(), StructuralType::any());
    }

    #[test]
    fn test_generic_substitution() {
        let ty = Page::<Page<HashMap<String, AnyValue>>>::describe();
        let outer = ty.as_struct().unwrap();
        let inner = outer.fields[1].ty.as_struct().unwrap();
        assert_eq!(inner.name.as_deref(), Some("Page"));
        assert_eq!(
            inner.fields[1].ty,
            StructuralType::map(StructuralType::string(), StructuralType::any())
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Option::<Vec<Uuid>>::describe()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "optional",
                "inner": {
                    "type": "slice",
                    "elem": { "type": "primitive", "kind": "any", "name": "UUID" }
                }
            })
        );
    }
}
