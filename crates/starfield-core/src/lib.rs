pub mod background;
pub mod color;
pub mod constants;
pub mod control;
pub mod field;
pub mod frame;
pub mod noise_field;
pub mod params;
pub mod particle;
pub mod starfield;

pub use background::*;
pub use color::*;
pub use constants::*;
pub use control::*;
pub use field::*;
pub use frame::*;
pub use noise_field::*;
pub use params::*;
pub use particle::*;
pub use starfield::*;
