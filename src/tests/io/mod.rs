//! I/O module tests.

mod memory_tests;
