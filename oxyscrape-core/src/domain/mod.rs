//! Core domain types
//!
//! Shared between the client library and the CLI. These model the service's
//! own vocabulary: a credential pair, the three-state job lifecycle, and the
//! result/render kinds the API understands.

pub mod credentials;
pub mod job;
