//! Browser session handling.
//!
//! A session cookie carries an opaque token; the `sessions` table maps it to
//! the logged-in role and display name. Sessions live until logout.

use std::fmt;

use actix_web::{cookie::Cookie, dev::Payload, web, FromRequest, HttpRequest};
use anyhow::Context;
use futures_util::future::LocalBoxFuture;

use crate::{
    database::{get_db_conn, sessions},
    error::AppError,
    DbPool,
};

pub const SESSION_COOKIE: &str = "hospital_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Patient => "/patient/login",
            Role::Doctor => "/doctor/login",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in patient's display name.
pub struct PatientSession {
    pub name: String,
}

/// The logged-in doctor's display name.
pub struct DoctorSession {
    pub name: String,
}

impl FromRequest for PatientSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let name = current_name(&req, Role::Patient).await?;
            Ok(PatientSession { name })
        })
    }
}

impl FromRequest for DoctorSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let name = current_name(&req, Role::Doctor).await?;
            Ok(DoctorSession { name })
        })
    }
}

fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

async fn current_name(req: &HttpRequest, role: Role) -> Result<String, AppError> {
    let token = session_token(req).ok_or(AppError::LoginRequired(role))?;
    let pool = req
        .app_data::<web::Data<DbPool>>()
        .context("DB pool is not configured")?
        .clone();

    let mut conn = get_db_conn(&pool)?;
    let data = web::block(move || sessions::find(&mut conn, &token))
        .await
        .context("DB error")??;

    match data {
        Some(data) if data.role == role.as_str() => Ok(data.name),
        _ => Err(AppError::LoginRequired(role)),
    }
}

/// Starts a session for `name`, replacing any session the request carries.
pub async fn begin(
    req: &HttpRequest,
    pool: &web::Data<DbPool>,
    role: Role,
    name: String,
) -> Result<Cookie<'static>, AppError> {
    let previous = session_token(req);
    let mut conn = get_db_conn(pool)?;
    let token = web::block(move || -> Result<String, AppError> {
        if let Some(previous) = previous {
            sessions::close(&mut conn, &previous)?;
        }
        sessions::open(&mut conn, role, &name)
    })
    .await
    .context("DB error")??;

    Ok(Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish())
}

/// Forgets the request's session and returns a cookie that clears it.
pub async fn end(req: &HttpRequest, pool: &web::Data<DbPool>) -> Result<Cookie<'static>, AppError> {
    if let Some(token) = session_token(req) {
        let mut conn = get_db_conn(pool)?;
        web::block(move || sessions::close(&mut conn, &token))
            .await
            .context("DB error")??;
    }

    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    Ok(cookie)
}
