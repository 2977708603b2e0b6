pub mod catmull_rom;

pub use catmull_rom::*;
