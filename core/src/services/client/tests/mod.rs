//! Tests for the client service
