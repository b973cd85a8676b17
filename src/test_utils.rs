use actix_web::{cookie::Cookie, dev::ServiceResponse};
use tempfile::TempDir;

use crate::{config::Settings, database, session::SESSION_COOKIE, DbPool};

/// An in-memory store (a single pooled connection, so every request sees the
/// same database) and settings pointing uploads at a fresh temp directory.
pub fn setup(ai_analysis: bool) -> (DbPool, Settings, TempDir) {
    let pool = database::create_pool(":memory:", 1).unwrap();
    database::migrate(&pool).unwrap();

    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("uploads")).unwrap();
    let settings = Settings {
        database_url: ":memory:".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        upload_dir: dir.path().join("uploads"),
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").into(),
        db_pool_size: 1,
        max_upload_bytes: crate::config::DEFAULT_MAX_UPLOAD_BYTES,
        ai_analysis,
    };
    (pool, settings, dir)
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .expect("no session cookie")
        .into_owned()
}

pub fn has_session_cookie<B>(resp: &ServiceResponse<B>) -> bool {
    resp.response()
        .cookies()
        .any(|c| c.name() == SESSION_COOKIE)
}

pub const BOUNDARY: &str = "----hospital-test-boundary";

/// Builds a `multipart/form-data` body from text fields and an optional
/// `report` file part.
pub fn multipart_body(fields: &[(&str, &str)], report: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((filename, content)) = report {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"report\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

#[macro_export]
macro_rules! init_test_app {
    ($pool:expr, $settings:expr) => {{
        let pool = actix_web::web::Data::new($pool.clone());
        let settings = actix_web::web::Data::new($settings.clone());
        actix_web::test::init_service(
            actix_web::App::new().configure(|cfg| $crate::configure(cfg, &pool, &settings)),
        )
        .await
    }};
}

/// Registers a patient, logs in and yields the session cookie.
#[macro_export]
macro_rules! login_patient {
    ($app:expr, $name:expr, $email:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/patient/register")
            .set_form([("name", $name), ("email", $email), ("password", $password)])
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);

        let req = actix_web::test::TestRequest::post()
            .uri("/patient/login")
            .set_form([("email", $email), ("password", $password)])
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
        $crate::test_utils::session_cookie(&resp)
    }};
}

/// Registers a doctor, logs in and yields the session cookie.
#[macro_export]
macro_rules! login_doctor {
    ($app:expr, $name:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/doctor/register")
            .set_form([
                ("name", $name),
                ("specialization", "General"),
                ("password", $password),
            ])
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);

        let req = actix_web::test::TestRequest::post()
            .uri("/doctor/login")
            .set_form([("name", $name), ("password", $password)])
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
        $crate::test_utils::session_cookie(&resp)
    }};
}
