// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// An exit hook reported a failure while the lightbox was closing.
    #[error("Exit Hook Error: {0}")]
    ExitHook(String),

    /// A [`ControllerHandle`](crate::ui::lightbox::ControllerHandle) was used
    /// after the controller it points to was dropped.
    #[error("Lightbox controller is not available in this scope")]
    ControllerUnavailable,

    /// A replay trace could not be interpreted.
    #[error("Replay Error: {0}")]
    Replay(String),
}

impl Error {
    /// Convenience constructor for hook failures.
    pub fn exit_hook(message: impl Into<String>) -> Self {
        Error::ExitHook(message.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
