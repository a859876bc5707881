pub use simpleorm_core::driver::{
    operation::{self, Operation},
    Connection, Driver, Response, Rows,
};
