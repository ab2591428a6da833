//! Transfer builder and runner tests.
