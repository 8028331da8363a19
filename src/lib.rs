pub mod config;
pub mod geometry;
pub mod gesture;
pub mod log;
pub mod manager;
pub mod mode;
pub mod model;
pub mod replay;
