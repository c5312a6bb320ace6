pub mod parameter_helpers;
pub mod window_helpers;
