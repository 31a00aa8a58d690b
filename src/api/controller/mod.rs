pub mod page;
pub mod selection;
