//! Oxyscrape Core
//!
//! Core types for the Oxylabs Web Scraper API client.
//!
//! This crate contains:
//! - Domain types: credentials, job status, result/render kinds
//! - DTOs: request payload builders and response shapes for the API

pub mod domain;
pub mod dto;
