//! Test modules for the tide client binary.

mod flow_tests;
