mod console;

pub use console::ConsoleSender;
