/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Signed HTTP exchanges and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod query;
pub mod signature;
pub mod wallet;

pub use error::{FtxError, Result};
pub use query::{QueryBuilder, QueryOptions, add_options};
pub use signature::{AuthHeaders, Clock, FixedClock, RequestSigner, SystemClock};
pub use wallet::WalletService;

pub use client::{Access, ClientConfig, Credentials, DEFAULT_BASE_URL, FtxClient};
