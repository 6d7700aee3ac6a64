pub mod buffer;
pub mod string;
