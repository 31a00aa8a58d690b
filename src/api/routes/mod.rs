//! Route declarations

pub mod selection_routes;
