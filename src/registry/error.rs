/// Errors that can occur during registry operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("agent already exists: {0}")]
    DuplicateAgent(String),

    #[error("agent not found: {0}")]
    AgentNotFound(String),
}
