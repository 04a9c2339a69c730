pub mod api;
pub mod channels;
pub mod config;
pub mod console;
pub mod errors;
pub mod playlist;
pub mod prompt;
pub mod servers;
