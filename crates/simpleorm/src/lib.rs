pub mod db;
pub use db::Db;

pub mod driver;

mod engine;

mod instance;
pub use instance::Instance;

mod model;
pub use model::Model;

mod primitive;
pub use primitive::Primitive;

pub use simpleorm_core::{schema, stmt::Value, Error, Result};
pub use simpleorm_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Db, Error, Instance, Model, Primitive, Result};
    pub use simpleorm_core::{
        schema::{self, Field, ModelId},
        stmt::Value,
    };
    pub use std::{
        convert::Into,
        option::Option,
        sync::OnceLock,
        vec::Vec,
    };
}
