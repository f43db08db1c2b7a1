pub mod expr;
pub mod token;
