pub mod integer_validator;

pub use integer_validator::IntegerValidator;
