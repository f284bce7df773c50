pub mod config;
pub mod core;
pub mod runtime;
pub mod sink;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use state::app_state::AppState;
pub use state::step::{STEPS, StepDescriptor};
pub use state::store::FormState;
pub use state::validation::ValidationError;
pub use state::wizard::{SubmitError, Wizard};
