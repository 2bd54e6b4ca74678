use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    #[error("at least one source number is required")]
    NoItems,
    #[error("{count} source numbers given, at most {max} are supported")]
    TooManyItems { count: usize, max: usize },
}
