pub mod combat;
pub mod decay;
pub mod events;
pub mod movement;
pub mod snapshot;
pub mod stamina;
