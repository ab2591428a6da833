//! Binary buffer tests.
