pub mod crud;
pub mod list;
pub mod report;

pub use crud::*;
pub use list::*;
pub use report::*;
