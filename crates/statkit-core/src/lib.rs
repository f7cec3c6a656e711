pub mod fields;
pub mod schema;

pub use fields::*;
pub use schema::*;
