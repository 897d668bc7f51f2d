//! Tests for HTTP controller endpoints.
//!
//! These tests call the Challengermode controllers directly and verify status codes and response
//! bodies for successful lookups, invalid requests and upstream failures.

mod token;

use roster_elo_test_utils::prelude::*;

use crate::util::TestSetupExt;
