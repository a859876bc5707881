use mysql_async::Value as MySqlValue;
use simpleorm_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this MySQL driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a value read from a result row, given the type of the field
    /// it belongs to.
    pub fn from_sql(value: MySqlValue, ty: stmt::Type) -> Result<Self> {
        let core_value = match (value, ty) {
            (MySqlValue::NULL, _) => CoreValue::Null,
            (MySqlValue::Int(v), stmt::Type::I64) => CoreValue::I64(v),
            (MySqlValue::UInt(v), stmt::Type::I64) => match i64::try_from(v) {
                Ok(v) => CoreValue::I64(v),
                Err(_) => return Err(simpleorm_core::err!("unsigned value {v} out of range for i64")),
            },
            (MySqlValue::Int(v), stmt::Type::String) => CoreValue::String(v.to_string()),
            // The text protocol returns every column as bytes
            (MySqlValue::Bytes(bytes), ty) => {
                let text = String::from_utf8(bytes).map_err(Error::driver_operation_failed)?;

                match ty {
                    stmt::Type::String => CoreValue::String(text),
                    stmt::Type::I64 => match text.parse() {
                        Ok(v) => CoreValue::I64(v),
                        Err(_) => return Err(Error::type_conversion(CoreValue::String(text), "i64")),
                    },
                }
            }
            (value, ty) => {
                return Err(simpleorm_core::err!(
                    "unsupported MySQL value for {ty:?} column; value={value:?}"
                ))
            }
        };

        Ok(Value(core_value))
    }

    pub fn to_mysql(&self) -> MySqlValue {
        match &self.0 {
            CoreValue::I64(value) => MySqlValue::Int(*value),
            CoreValue::Null => MySqlValue::NULL,
            CoreValue::String(value) => MySqlValue::Bytes(value.as_bytes().to_vec()),
        }
    }
}
