//! HTTP protocol implementation.
//!
//! This module implements the one-shot HTTP/1.1 cycle the server speaks:
//! read a single request line, serve a single response, close.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler driving one request-response cycle
//! - **`request`**: Tolerant request-line splitting (only the path token is used)
//! - **`response`**: HTTP response representation with builder pattern
//! - **`mime`**: Content-type inference from the requested file name
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection Lifecycle
//!
//! ```text
//! accept → read request line → resolve file → frame 200/404 → write → close
//! ```
//!
//! Headers sent by the client after the request line are never read; the
//! connection always closes after one response.

pub mod connection;
pub mod mime;
pub mod request;
pub mod response;
pub mod writer;
