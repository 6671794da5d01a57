//! Auth route handlers: credential issuance and logout.

pub mod issue;
pub mod logout;

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::config::Environment;

/// Name of the cookie carrying the session credential
pub const TOKEN_COOKIE: &str = "token";

/// Builds the credential cookie.
///
/// Production serves the browser client from a different origin, so the
/// cookie must be `SameSite=None; Secure` there. Development runs over
/// plain HTTP where `None` would be rejected, so it stays `Lax`.
pub fn session_cookie(
    value: String,
    max_age_secs: i64,
    environment: Environment,
) -> Cookie<'static> {
    let production = environment.is_production();
    Cookie::build(TOKEN_COOKIE, value)
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Lax
        })
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_cookie_is_lax_and_insecure() {
        let cookie = session_cookie("abc".to_string(), 3600, Environment::Development);
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_ne!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn production_cookie_is_none_and_secure() {
        let cookie = session_cookie("abc".to_string(), 3600, Environment::Production);
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.secure(), Some(true));
    }
}
