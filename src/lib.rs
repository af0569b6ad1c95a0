//! # Tidemark
//!
//! Typed containers for request lifecycles and composable validators.
//!
//! - [`result`]: combinators over `Result` (sequence, traverse, apply,
//!   lifting optional and guarded values) with async-lifted variants.
//! - [`RemoteData`]: the four states of remote data, `NotAsked`, `Loading`,
//!   `Failure` and `Success`, with the same combinator surface. Non-success
//!   states propagate with their tag intact.
//! - [`validator`]: validators whose failures are lists of messages that
//!   accumulate instead of short-circuiting.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidemark::prelude::*;
//! use tidemark::validator::{many, string};
//!
//! // Short-circuiting aggregation over remote data
//! let user = RemoteData::<_, String>::Success("ada");
//! let posts = RemoteData::<_, String>::Loading;
//! let page = tidemark::remote::map_many((user, posts), |(u, p): (&str, u32)| format!("{u}: {p}"));
//! assert_eq!(page, RemoteData::Loading);
//!
//! // Accumulating validation
//! let username = many(vec![
//!     string::min("too short", 3),
//!     string::only_lowercase("lowercase only"),
//! ]);
//! assert_eq!(
//!     username.validate("A".to_string()),
//!     Err(vec!["too short".to_string(), "lowercase only".to_string()])
//! );
//! ```
//!
//! ## Features
//!
//! - `json` (default): validators over `serde_json::Value`.
//! - `async`: [`RemoteCell`], a watch-backed lifecycle slot on tokio.
//! - `serde`: tagged-object (de)serialization for `RemoteData` and `Result`.
//! - `tracing`: lifecycle events from the async layer.
//! - `proptest`: `Arbitrary` for `RemoteData`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod nullable;
pub mod remote;
pub mod result;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::Error;
pub use nullable::Nullable;
#[cfg(feature = "async")]
pub use remote::RemoteCell;
pub use remote::{RemoteData, SequenceRemote};
pub use result::{ResultExt, SequenceResults};
pub use validator::{Validated, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::nullable::Nullable;
    #[cfg(feature = "async")]
    pub use crate::remote::RemoteCell;
    pub use crate::remote::{RemoteData, SequenceRemote};
    pub use crate::result::{ResultExt, SequenceResults};
    pub use crate::validator::{Validated, Validator};
}
