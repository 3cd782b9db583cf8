use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    OutOfRange { index: usize, size: usize },
    EmptyCatalog,
    EmptyTitle,
    EmptyImageRef,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "flower index {index} is outside catalog of size {size}")
            }
            Self::EmptyCatalog => write!(f, "flower catalog must contain at least one flower"),
            Self::EmptyTitle => write!(f, "flower title must not be empty"),
            Self::EmptyImageRef => write!(f, "flower image reference must not be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
