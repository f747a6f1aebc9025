use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("player {name} ({uuid}) has no open menu")]
    NoOpenMenu { uuid: Uuid, name: String },
}

pub type MenuResult<T> = std::result::Result<T, MenuError>;
