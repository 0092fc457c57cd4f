pub mod kind;
pub mod record;
pub mod visual;

pub use kind::*;
pub use record::*;
pub use visual::*;
