//! Namespace → pod → log tail selection flow

pub mod dto;
pub mod model;
pub mod service;
