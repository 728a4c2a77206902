// Service module exports

pub mod drop;
pub mod geometry;
pub mod layout;
pub mod settings;
