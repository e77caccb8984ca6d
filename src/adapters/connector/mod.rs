//! Analytics service connector
//!
//! The connector follows a trait-based design so the export pipeline can be
//! exercised against mock implementations in tests.

pub mod http;
pub mod traits;

pub use http::HttpConnector;
pub use traits::Connector;
