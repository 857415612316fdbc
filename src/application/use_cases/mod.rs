mod generate_code;

pub use generate_code::*;
