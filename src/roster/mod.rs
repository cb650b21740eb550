//! The page: validation, the user list request and rendering.

pub mod client;
pub mod error;
pub mod page;
pub mod render;
pub mod status;
pub mod user;
pub mod validator;
pub mod view;

pub use self::client::{HttpSource, UserSource};
pub use self::error::FetchError;
pub use self::page::Page;
pub use self::status::{Severity, StatusMessage};
pub use self::user::{SortKey, User};
pub use self::validator::valid_email;
pub use self::view::{Format, RecordingSurface, Row, Surface, TerminalSurface};

/// The user list every submission loads.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
