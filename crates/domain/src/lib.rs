pub mod errors;
pub mod notes;
pub mod quote;
pub mod seed;
pub mod task;

pub use errors::*;
pub use notes::*;
pub use quote::*;
pub use task::*;
