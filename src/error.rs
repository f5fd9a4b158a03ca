//! Error types for the containers.
//!
//! Every fallible operation in this crate fails for the same reason: it
//! needs an element and the container has none. The failure is reported
//! before any state is touched, so a rejected call leaves the container
//! exactly as it was.

/// Represents an attempt to remove, peek at, or sample an element of an
/// empty container.
///
/// # Examples
///
/// ```rust
/// use randqueue::error::EmptyContainerError;
///
/// let error = EmptyContainerError {
///     container_name: "Deque",
///     method_name: "remove_first",
/// };
/// assert_eq!(format!("{}", error), "Deque::remove_first: container is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyContainerError {
    /// The name of the container the call was made on.
    pub container_name: &'static str,
    /// The name of the rejected method.
    pub method_name: &'static str,
}

impl EmptyContainerError {
    pub(crate) const fn new(container_name: &'static str, method_name: &'static str) -> Self {
        Self {
            container_name,
            method_name,
        }
    }
}

impl std::fmt::Display for EmptyContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: container is empty",
            self.container_name, self.method_name
        )
    }
}

impl std::error::Error for EmptyContainerError {}

/// Errors reported by the containers in this crate.
///
/// Absent items cannot be inserted in the first place (`T` is never null),
/// so emptiness is the only runtime failure.
///
/// # Examples
///
/// ```rust
/// use randqueue::deque::Deque;
/// use randqueue::error::ContainerError;
///
/// let mut deque: Deque<i32> = Deque::new();
/// let error = deque.remove_last().unwrap_err();
/// assert!(error.is_empty_container());
/// assert_eq!(error.to_string(), "Deque::remove_last: container is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ContainerError {
    /// The container holds no elements.
    Empty(EmptyContainerError),
}

impl ContainerError {
    pub(crate) const fn empty(container_name: &'static str, method_name: &'static str) -> Self {
        Self::Empty(EmptyContainerError::new(container_name, method_name))
    }

    /// Returns `true` if the call was rejected because the container was empty.
    #[must_use]
    pub const fn is_empty_container(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty(error) => Some(error),
        }
    }
}

impl From<EmptyContainerError> for ContainerError {
    fn from(error: EmptyContainerError) -> Self {
        Self::Empty(error)
    }
}
