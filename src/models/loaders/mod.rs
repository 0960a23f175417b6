pub mod input_loader;

pub use input_loader::load_input;
