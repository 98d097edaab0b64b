mod reader;

pub mod decode;
pub mod errors;
