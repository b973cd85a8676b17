mod requests;
mod responses;

use crate::{
    database::{accounts, appointments, get_db_conn},
    error::AppError,
    models::doctors::NewDoctor,
    protocol::{appointment_items, AppointmentItem},
    session::{self, DoctorSession, Role},
    utils::redirect,
    DbPool,
};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use anyhow::Context;
use tracing::{info, warn};

use self::{
    requests::{LoginRequest, RegisterRequest, ReviewRequest},
    responses::{DashboardResponse, ReviewResponse},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register_page)
        .service(register)
        .service(login_page)
        .service(login)
        .service(dashboard)
        .service(view_review)
        .service(review);
}

crate::page_funcs! {
    (register_page, "/register", "doctor/register.html"),
    (login_page, "/login", "doctor/login.html"),
}

#[post("/register")]
async fn register(
    pool: web::Data<DbPool>,
    info: web::Form<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let info = info.into_inner();
    let data = NewDoctor {
        name: info.name,
        specialization: info.specialization,
        password: info.password,
    };

    let mut conn = get_db_conn(&pool)?;
    let id = web::block(move || accounts::register_doctor(&mut conn, data))
        .await
        .context("DB error")??;
    info!(doctor_id = id, "Doctor registered");

    Ok(redirect("/doctor/login"))
}

#[post("/login")]
async fn login(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    info: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let info = info.into_inner();
    let name = info.name.clone();

    let mut conn = get_db_conn(&pool)?;
    let doctor = web::block(move || {
        accounts::authenticate_doctor(&mut conn, &info.name, &info.password)
    })
    .await
    .context("DB error")??;

    let doctor = match doctor {
        Some(doctor) => doctor,
        None => {
            warn!(doctor = %name, "Invalid doctor login");
            return Err(AppError::AuthenticationFailure(Role::Doctor));
        }
    };

    let cookie = session::begin(&req, &pool, Role::Doctor, doctor.name.clone()).await?;
    info!(doctor = %doctor.name, "Doctor logged in");

    let mut response = redirect("/doctor/dashboard");
    response
        .add_cookie(&cookie)
        .context("Failed to set session cookie")?;
    Ok(response)
}

#[get("/dashboard")]
async fn dashboard(
    pool: web::Data<DbPool>,
    session: DoctorSession,
) -> Result<HttpResponse, AppError> {
    let name = session.name.clone();
    let mut conn = get_db_conn(&pool)?;
    let appos = web::block(move || appointments::list_for_doctor(&mut conn, &name))
        .await
        .context("DB error")??;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        success: true,
        err: "".to_string(),
        doctor: session.name,
        appointments: appointment_items(appos),
    }))
}

#[get("/review/{id}")]
async fn view_review(
    pool: web::Data<DbPool>,
    _session: DoctorSession,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let mut conn = get_db_conn(&pool)?;
    let appo = web::block(move || appointments::find(&mut conn, id))
        .await
        .context("DB error")??;

    Ok(HttpResponse::Ok().json(ReviewResponse {
        success: true,
        err: "".to_string(),
        appointment: AppointmentItem::from(appo),
    }))
}

#[post("/review/{id}")]
async fn review(
    pool: web::Data<DbPool>,
    session: DoctorSession,
    id: web::Path<i32>,
    info: web::Form<ReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let info = info.into_inner();

    let mut conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        appointments::attach_review(&mut conn, id, info.suggestion, info.medicine)
    })
    .await
    .context("DB error")??;
    info!(
        appointment_id = appo.id,
        doctor = %session.name,
        "Suggestion sent successfully to {}", appo.patient_name
    );

    Ok(redirect("/doctor/dashboard"))
}
