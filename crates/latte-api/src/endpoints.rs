//! Canonical endpoint paths for the marketplace backend.

use uuid::Uuid;

pub const AUTH_SIGNUP: &str = "/api/auth/signup";
pub const AUTH_SIGNIN: &str = "/api/auth/signin";
pub const AUTH_GOOGLE: &str = "/api/auth/google";
pub const AUTH_ME: &str = "/api/auth/me";

pub const LISTINGS: &str = "/api/listings";
pub const MY_LISTINGS: &str = "/api/listings/my";

/// Path for a single listing.
pub fn listing(id: Uuid) -> String {
    format!("{LISTINGS}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_path() {
        let id = Uuid::nil();
        assert_eq!(
            listing(id),
            "/api/listings/00000000-0000-0000-0000-000000000000"
        );
    }
}
