//! Tests for the Challengermode service layer.
//!
//! These tests run the access key cache and the roster client against a mock Challengermode
//! server and verify request counts, credential reuse and error mapping.

mod roster;
mod token_cache;

use roster_elo_test_utils::prelude::*;

use crate::util::TestSetupExt;
