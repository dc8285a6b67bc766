use actix_web::{
    cookie::{Cookie, SameSite},
    web, HttpRequest, HttpResponse,
};

use crate::error::ApiError;
use crate::security::csrf::CsrfSigner;

pub const CSRF_COOKIE: &str = "csrf_token";
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// GET /api/v1/auth/csrf-token
/// Issues a signed token as a cookie and in the body. The cookie is not
/// HttpOnly: page scripts must read it back into the request header, which
/// is exactly what a cross-origin attacker cannot do.
pub async fn issue_csrf_token(signer: web::Data<CsrfSigner>) -> Result<HttpResponse, ApiError> {
    let token = signer.issue()?;

    let cookie = Cookie::build(CSRF_COOKIE, token.clone())
        .path("/")
        .http_only(false)
        .same_site(SameSite::Lax)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "csrf_token": token })))
}

/// Double-submit check for state-changing requests: the cookie and the
/// header must both be present, match each other, and carry a valid
/// unexpired signature.
pub fn check_double_submit(req: &HttpRequest, signer: &CsrfSigner) -> Result<(), ApiError> {
    let cookie = req
        .cookie(CSRF_COOKIE)
        .ok_or_else(|| ApiError::CsrfRejected("Missing csrf_token cookie".into()))?;

    let header = req
        .headers()
        .get(CSRF_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::CsrfRejected("Missing X-CSRF-Token header".into()))?;

    if cookie.value() != header {
        return Err(ApiError::CsrfRejected(
            "CSRF cookie and header mismatch".into(),
        ));
    }

    signer.verify(header)
}
