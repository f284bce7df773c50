pub mod app_state;
pub mod flow;
pub mod focus;
pub mod step;
pub mod store;
pub mod validation;
pub mod wizard;
