use actix_web::{http::header, HttpResponse};

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Generates `GET` handlers that serve an HTML page from the static
/// directory, optionally behind a session extractor.
#[macro_export]
macro_rules! page_funcs {
    ( $( ( $func_name:ident, $url:literal, $page:expr $(, $guard:ty )? ) ),+ $(,)? ) => {
        $(
            #[actix_web::get($url)]
            async fn $func_name(
                settings: actix_web::web::Data<$crate::config::Settings>
                $(, _session: $guard )?
            ) -> Result<actix_files::NamedFile, $crate::error::AppError> {
                $crate::pages::open_page(&settings, $page)
            }
        )+
    };
}
