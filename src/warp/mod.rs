pub mod engine;
pub mod hammer_tile;
