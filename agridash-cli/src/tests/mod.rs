//! Shared test harness modules for the AgriDash CLI.

use super::*;

mod helpers;
