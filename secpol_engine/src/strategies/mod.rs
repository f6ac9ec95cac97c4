//! System access strategies
//!
//! - [`SystemCommandExecutor`]: whitelisted, time-bounded subprocesses
//! - [`PolicyExporter`], [`PolicyImporter`], [`RegistryEditor`]: tool seams
//! - [`SeceditTool`]: the Windows implementation of all three

pub mod command_executor;
pub mod secedit;
pub mod traits;

pub use command_executor::{CommandError, CommandOutput, SystemCommandExecutor};
pub use secedit::SeceditTool;
pub use traits::{PolicyExporter, PolicyImporter, RegistryEditor};
