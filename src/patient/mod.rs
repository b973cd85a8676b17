mod requests;
mod responses;

use crate::{
    classifier,
    config::Settings,
    database::{accounts, appointments, get_db_conn},
    error::AppError,
    models::{
        appointments::{Appointment, NewAppointment},
        patients::NewPatient,
    },
    protocol::appointment_items,
    session::{self, PatientSession, Role},
    uploads,
    utils::redirect,
    DbPool,
};
use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use anyhow::Context;
use diesel::{Connection, SqliteConnection};
use std::path::Path;
use tracing::{info, warn};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig, ai_analysis: bool) {
    cfg.service(register_page)
        .service(register)
        .service(login_page)
        .service(login)
        .service(dashboard)
        .service(book_page)
        .service(book);
    if ai_analysis {
        cfg.service(ai_page).service(ai);
    }
}

crate::page_funcs! {
    (register_page, "/register", "patient/register.html"),
    (login_page, "/login", "patient/login.html"),
    (book_page, "/book", "patient/book.html", PatientSession),
    (ai_page, "/ai", "patient/ai.html", PatientSession),
}

#[post("/register")]
async fn register(
    pool: web::Data<DbPool>,
    info: web::Form<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let info = info.into_inner();
    let data = NewPatient {
        name: info.name,
        email: info.email,
        password: info.password,
    };

    let mut conn = get_db_conn(&pool)?;
    let id = web::block(move || accounts::register_patient(&mut conn, data))
        .await
        .context("DB error")??;
    info!(patient_id = id, "Patient registered");

    Ok(redirect("/patient/login"))
}

#[post("/login")]
async fn login(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    info: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let info = info.into_inner();

    let mut conn = get_db_conn(&pool)?;
    let email = info.email.clone();
    let patient = web::block(move || {
        accounts::authenticate_patient(&mut conn, &info.email, &info.password)
    })
    .await
    .context("DB error")??;

    let patient = match patient {
        Some(patient) => patient,
        None => {
            warn!(email = %email, "Invalid patient login");
            return Err(AppError::AuthenticationFailure(Role::Patient));
        }
    };

    let cookie = session::begin(&req, &pool, Role::Patient, patient.name.clone()).await?;
    info!(patient = %patient.name, "Patient logged in");

    let mut response = redirect("/patient/dashboard");
    response
        .add_cookie(&cookie)
        .context("Failed to set session cookie")?;
    Ok(response)
}

#[get("/dashboard")]
async fn dashboard(
    pool: web::Data<DbPool>,
    session: PatientSession,
) -> Result<HttpResponse, AppError> {
    let name = session.name.clone();
    let mut conn = get_db_conn(&pool)?;
    let (appos, reviews) = web::block(move || -> Result<_, AppError> {
        let appos = appointments::list_for_patient(&mut conn, &name)?;
        let reviews = appointments::list_reviews_for_patient(&mut conn, &name)?;
        Ok((appos, reviews))
    })
    .await
    .context("DB error")??;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        success: true,
        err: "".to_string(),
        patient: session.name,
        appointments: appointment_items(appos),
        reviews: appointment_items(reviews),
    }))
}

#[post("/book")]
async fn book(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    session: PatientSession,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let info = BookRequest::from_multipart(payload, settings.max_upload_bytes).await?;

    let data = NewAppointment {
        patient_name: session.name,
        doctor_name: Some(info.doctor),
        date: Some(info.date),
        time: Some(info.time),
        problem: info.problem,
        ..Default::default()
    };

    let dir = settings.upload_dir.clone();
    let mut conn = get_db_conn(&pool)?;
    let appo = web::block(move || book_with_report(&mut conn, &dir, data, info.report))
        .await
        .context("DB error")??;
    info!(
        appointment_id = appo.id,
        "Appointment booked successfully, {}!", appo.patient_name
    );

    Ok(redirect("/patient/dashboard"))
}

/// Inserts the appointment and then writes its report inside one transaction,
/// so a failed write leaves no row and a failed insert leaves no file.
fn book_with_report(
    conn: &mut SqliteConnection,
    dir: &Path,
    mut data: NewAppointment,
    report: Option<UploadedReport>,
) -> Result<Appointment, AppError> {
    if let Some(report) = &report {
        data.report = Some(uploads::stored_name(&report.filename)?);
    }

    conn.transaction(|conn| {
        let appo = appointments::book(conn, data)?;
        if let Some(report) = report {
            uploads::save_report(dir, &report.filename, &report.content)?;
        }
        Ok(appo)
    })
}

#[post("/ai")]
async fn ai(
    pool: web::Data<DbPool>,
    session: PatientSession,
    info: web::Form<AiRequest>,
) -> Result<HttpResponse, AppError> {
    let info = info.into_inner();
    let analysis = classifier::classify(&info.problem);

    let data = NewAppointment {
        patient_name: session.name,
        problem: info.problem,
        medicine: Some(analysis.medicine.to_string()),
        ai_analysis: Some(analysis.diagnosis.to_string()),
        ..Default::default()
    };

    let mut conn = get_db_conn(&pool)?;
    let appo = web::block(move || appointments::book(&mut conn, data))
        .await
        .context("DB error")??;
    info!(appointment_id = appo.id, patient = %appo.patient_name, "AI analysis stored");

    Ok(HttpResponse::Ok().json(AiAnalysisResponse {
        success: true,
        err: "".to_string(),
        appointment_id: appo.id,
        diagnosis: analysis.diagnosis.to_string(),
        medicine: analysis.medicine.to_string(),
    }))
}
