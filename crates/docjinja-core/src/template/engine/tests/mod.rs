//! Tests for template engine
//!
//! Split by concern: plain rendering, control flow and failures.

use super::*;

// Test helper functions
mod helpers;
