pub mod reconstruct;
pub mod record;

pub use reconstruct::*;
pub use record::*;
