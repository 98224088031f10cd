pub mod config;
pub mod controller_message;
pub mod error;
pub mod scene;
pub mod sim_state;
pub mod time_manager;

pub use config::SandboxConfig;
pub use controller_message::ControllerMessage;
pub use error::ConfigError;
pub use sim_state::{InsertionMode, SimState};
pub use time_manager::{TimeManager, TimeModel};
