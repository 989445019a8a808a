pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod io;
pub mod render;
pub mod transform;
pub mod view_state;
pub mod viewer;
