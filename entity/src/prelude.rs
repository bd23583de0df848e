pub use super::contract::Entity as Contract;
pub use super::insurer::Entity as Insurer;
pub use super::process::Entity as Process;
pub use super::project::Entity as Project;
pub use super::subprocess::Entity as Subprocess;
pub use super::task::Entity as Task;
