pub mod arena;
pub mod commands;
pub mod handle;
pub mod player;
