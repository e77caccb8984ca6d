//! External system integrations for Beacon.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`connector`] - Command dispatch to the analytics service
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations. The connector layer uses
//! trait-based abstraction so the export pipeline never depends on a concrete
//! transport.

pub mod connector;
