//! I/O utilities for binary geometry records
//!
//! This module provides the byte order strategies shared by the WKB reader
//! and writer.

pub mod byte_order;
