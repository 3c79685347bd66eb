//! Single integration test binary; modules below share the common harness.

mod common;

mod boundary_tests;
mod router_tests;
