//! Tests for the auth repository mock
