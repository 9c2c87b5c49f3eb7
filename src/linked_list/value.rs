//! Run-time kinds for list elements.
//!
//! A [`LinkedList`](super::list::LinkedList) is generic over its element type, so a
//! list of a single Rust type is homogeneous by construction. Lists that must hold
//! values of different types use [`Value`], whose variant tag is its [`ValueKind`].
//! Typed lists compare these tags on every insert.

use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

/// The run-time type tag of a list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    UInt,
    Float,
    Bool,
    Char,
    Str,
    Unit,
}

impl ValueKind {
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::Str => "string",
            ValueKind::Unit => "unit",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trait for elements that report their run-time kind.
pub trait Kinded {
    fn kind(&self) -> ValueKind;
}

macro_rules! impl_kinded {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Kinded for $ty {
                #[inline]
                fn kind(&self) -> ValueKind {
                    ValueKind::$kind
                }
            }
        )+
    };
}

impl_kinded!(Int => i8, i16, i32, i64, i128, isize);
impl_kinded!(UInt => u8, u16, u32, u64, u128, usize);
impl_kinded!(Float => f32, f64);
impl_kinded!(Bool => bool);
impl_kinded!(Char => char);
impl_kinded!(Str => String, &str);
impl_kinded!(Unit => ());

/// A dynamically typed list element.
///
/// Equality is variant-sensitive, so `Int(1)` and `Float(1.0)` are different values.
/// Floats compare and hash by bit pattern, which makes `Value` usable as a set key.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Unit,
}

impl Kinded for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::Str(_) => ValueKind::Str,
            Value::Unit => ValueKind::Unit,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Int(v) => v.hash(state),
            Value::UInt(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Bool(v) => v.hash(state),
            Value::Char(v) => v.hash(state),
            Value::Str(v) => v.hash(state),
            Value::Unit => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::UInt(v) => fmt::Display::fmt(v, f),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Char(v) => fmt::Display::fmt(v, f),
            Value::Str(v) => fmt::Display::fmt(v, f),
            Value::Unit => f.pad("()"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident <= $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )+
    };
}

impl_from!(Int <= i8, i16, i32, i64);
impl_from!(UInt <= u8, u16, u32, u64);
impl_from!(Float <= f32, f64);
impl_from!(Bool <= bool);
impl_from!(Char <= char);
impl_from!(Str <= String, &str);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}
