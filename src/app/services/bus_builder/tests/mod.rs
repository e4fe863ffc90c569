//! Tests for bus derivation

mod normalizer_tests;
