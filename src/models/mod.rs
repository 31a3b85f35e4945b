pub mod category;
pub mod preferences;
pub mod product;

pub use category::*;
pub use preferences::*;
pub use product::*;
