//! # Netcarve Common
//!
//! Types shared by the arithmetic engine and its consumers.
//!
//! * **[`network`]**: CIDR parsing/formatting on top of `pnet::ipnetwork`, plus
//!   helpers for ordering address strings.
//! * **[`error`]**: The error type every engine operation returns.
//! * **[`config`]**: Plain configuration structs filled in by the CLI.

pub mod config;
pub mod error;
pub mod network;
