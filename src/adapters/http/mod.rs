//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own adapter; `router` assembles them.

pub mod diet;
pub mod error;
pub mod extract;
pub mod router;
pub mod wellness;

pub use error::{ApiError, ErrorResponse};
pub use extract::{AuthenticatedUser, USER_ID_HEADER};
pub use router::{api_router, AppState};
