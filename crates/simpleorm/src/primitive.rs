use crate::{schema::FieldTy, Result, Value};

/// A Rust type that can be stored in a single column.
pub trait Primitive: Sized {
    /// The column kind the type maps to
    const FIELD_TY: FieldTy;

    /// Load the type from a column value.
    fn load(value: Value) -> Result<Self>;

    /// The value to store, or `None` when the field holds no value.
    fn to_value(&self) -> Option<Value>;
}

impl Primitive for i64 {
    const FIELD_TY: FieldTy = FieldTy::Integer;

    fn load(value: Value) -> Result<Self> {
        value.to_i64()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::I64(*self))
    }
}

impl Primitive for i32 {
    const FIELD_TY: FieldTy = FieldTy::Integer;

    fn load(value: Value) -> Result<Self> {
        i32::try_from(value)
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::I64((*self).into()))
    }
}

impl Primitive for String {
    const FIELD_TY: FieldTy = FieldTy::String;

    fn load(value: Value) -> Result<Self> {
        value.into_string()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const FIELD_TY: FieldTy = T::FIELD_TY;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::load(value).map(Some)
        }
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::to_value)
    }
}
