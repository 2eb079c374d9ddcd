pub mod declarations;
pub mod loader;

pub use declarations::*;
pub use loader::*;
