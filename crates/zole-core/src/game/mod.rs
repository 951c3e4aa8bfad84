pub mod serialization;
pub mod state;
