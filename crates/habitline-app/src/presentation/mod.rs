pub mod bootstrap;
pub mod render;
pub mod repl;
pub mod state;
