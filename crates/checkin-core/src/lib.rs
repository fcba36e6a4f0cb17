//! # Check-in Core
//!
//! Foundational types shared by every crate in the workspace.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use checkin_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("firstName is required"));
//! ```

pub mod errors;

pub use errors::AppError;
