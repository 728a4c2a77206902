// Module exports for models

pub mod drop_item;
pub mod event;
pub mod intent;
pub mod settings;
