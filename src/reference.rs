use std::fmt;

/// A name-or-value reference.
///
/// Registration and lookup APIs accept either a registered name or a direct
/// value; the owning registry resolves a `Name` once at the point of use.
pub enum Ref<T> {
    Name(Box<str>),
    Value(T),
}

impl<T> Ref<T> {
    pub fn name(name: impl Into<Box<str>>) -> Self {
        Self::Name(name.into())
    }

    pub fn value(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl<T> From<String> for Ref<T> {
    fn from(name: String) -> Self {
        Self::Name(name.into())
    }
}

impl<T> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
        }
    }
}
