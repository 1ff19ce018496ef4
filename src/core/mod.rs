pub mod aggregate;
pub mod analyze;
pub mod breaks;
pub mod parse;
pub mod sanitize;
pub mod schema;
