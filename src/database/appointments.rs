use diesel::prelude::*;

use crate::{
    error::AppError,
    models::appointments::{Appointment, NewAppointment},
};

/// Always inserts a new row. `doctor_name` is not checked against `doctors`.
pub fn book(conn: &mut SqliteConnection, data: NewAppointment) -> Result<Appointment, AppError> {
    use crate::schema::appointments;

    let appo = diesel::insert_into(appointments::table)
        .values(data)
        .returning(Appointment::as_returning())
        .get_result(conn)?;
    Ok(appo)
}

pub fn list_for_patient(
    conn: &mut SqliteConnection,
    patient_name: &str,
) -> Result<Vec<Appointment>, AppError> {
    use crate::schema::appointments;

    let appos = appointments::table
        .filter(appointments::patient_name.eq(patient_name))
        .order(appointments::id.asc())
        .select(Appointment::as_select())
        .load(conn)?;
    Ok(appos)
}

/// Appointments of the patient a doctor has already answered.
pub fn list_reviews_for_patient(
    conn: &mut SqliteConnection,
    patient_name: &str,
) -> Result<Vec<Appointment>, AppError> {
    use crate::schema::appointments;

    let appos = appointments::table
        .filter(appointments::patient_name.eq(patient_name))
        .filter(appointments::suggestion.is_not_null())
        .order(appointments::id.asc())
        .select(Appointment::as_select())
        .load(conn)?;
    Ok(appos)
}

pub fn list_for_doctor(
    conn: &mut SqliteConnection,
    doctor_name: &str,
) -> Result<Vec<Appointment>, AppError> {
    use crate::schema::appointments;

    let appos = appointments::table
        .filter(appointments::doctor_name.eq(doctor_name))
        .order(appointments::id.asc())
        .select(Appointment::as_select())
        .load(conn)?;
    Ok(appos)
}

pub fn find(conn: &mut SqliteConnection, id: i32) -> Result<Appointment, AppError> {
    use crate::schema::appointments;

    appointments::table
        .find(id)
        .select(Appointment::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {}", id)))
}

/// Overwrites any earlier suggestion and medicine.
pub fn attach_review(
    conn: &mut SqliteConnection,
    id: i32,
    suggestion: String,
    medicine: String,
) -> Result<Appointment, AppError> {
    use crate::schema::appointments;

    diesel::update(appointments::table.find(id))
        .set((
            appointments::suggestion.eq(Some(suggestion)),
            appointments::medicine.eq(Some(medicine)),
        ))
        .returning(Appointment::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {}", id)))
}
