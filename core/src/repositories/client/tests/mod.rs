//! Tests for the client repository mock

mod mock_tests;
