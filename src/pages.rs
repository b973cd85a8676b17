use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};
use anyhow::Context;
use tracing::info;

use crate::{config::Settings, error::AppError, session, utils::redirect, DbPool};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(logout);
}

pub fn open_page(settings: &Settings, page: &str) -> Result<NamedFile, AppError> {
    let path = settings.static_dir.join(page);
    let file = NamedFile::open(&path)
        .with_context(|| format!("Failed to open page {}", path.display()))?;
    Ok(file)
}

crate::page_funcs! {
    (home, "/", "home.html"),
}

#[get("/logout")]
async fn logout(req: HttpRequest, pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let cookie = session::end(&req, &pool).await?;
    info!("Session cleared");

    let mut response = redirect("/");
    response
        .add_cookie(&cookie)
        .context("Failed to clear session cookie")?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use crate::{session::SESSION_COOKIE, test_utils};

    #[actix_web::test]
    async fn home_page_is_served() {
        let (pool, settings, _dir) = test_utils::setup(true);
        let app = crate::init_test_app!(pool, settings);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn logout_clears_session() {
        let (pool, settings, _dir) = test_utils::setup(true);
        let app = crate::init_test_app!(pool, settings);

        let cookie = crate::login_patient!(app, "Alice", "a@x.com", "pw1");

        let req = test::TestRequest::get()
            .uri("/logout")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        let removal = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap();
        assert_eq!(removal.value(), "");

        // the old token no longer opens the dashboard
        let req = test::TestRequest::get()
            .uri("/patient/dashboard")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("location").unwrap(), "/patient/login");
    }

    #[actix_web::test]
    async fn logout_without_session_redirects_home() {
        let (pool, settings, _dir) = test_utils::setup(true);
        let app = crate::init_test_app!(pool, settings);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/logout").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("location").unwrap(), "/");
    }
}
