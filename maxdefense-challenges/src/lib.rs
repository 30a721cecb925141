pub mod armor;
pub use armor::*;
pub mod database;
pub use database::*;
pub mod filter;
pub use filter::*;
pub mod generate;
pub use generate::*;
pub mod selection;
pub use selection::*;
