//! Admin credential preflight check.

use super::CheckResult;
use crate::models::credential::Credential;

/// Check that an admin token is available.
pub fn check(credential: Option<&Credential>) -> CheckResult {
    match credential {
        Some(_) => CheckResult::ok("Admin token", "configured"),
        None => CheckResult::fail(
            "Admin token",
            "not configured",
            "Pass --token or set MOVIE_CATALOG_TOKEN",
        ),
    }
}
