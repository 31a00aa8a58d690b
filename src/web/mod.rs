//! Server-rendered pages (index and error)

pub mod render;
