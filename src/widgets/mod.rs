pub mod text_edit;
pub mod text_input;
pub mod traits;

pub use text_input::TextInput;
