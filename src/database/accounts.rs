use diesel::prelude::*;

use crate::{
    error::AppError,
    models::{
        doctors::{Doctor, NewDoctor},
        patients::{NewPatient, Patient},
    },
};

/// Inserts unconditionally; duplicate emails are accepted.
pub fn register_patient(conn: &mut SqliteConnection, data: NewPatient) -> Result<i32, AppError> {
    use crate::schema::patients;

    let id = diesel::insert_into(patients::table)
        .values(data)
        .returning(patients::id)
        .get_result::<i32>(conn)?;
    Ok(id)
}

/// Inserts unconditionally; duplicate names are accepted.
pub fn register_doctor(conn: &mut SqliteConnection, data: NewDoctor) -> Result<i32, AppError> {
    use crate::schema::doctors;

    let id = diesel::insert_into(doctors::table)
        .values(data)
        .returning(doctors::id)
        .get_result::<i32>(conn)?;
    Ok(id)
}

/// Patients log in with their email. The oldest matching row wins.
pub fn authenticate_patient(
    conn: &mut SqliteConnection,
    email: &str,
    password: &str,
) -> Result<Option<Patient>, AppError> {
    use crate::schema::patients;

    let patient = patients::table
        .filter(patients::email.eq(email))
        .filter(patients::password.eq(password))
        .order(patients::id.asc())
        .select(Patient::as_select())
        .first(conn)
        .optional()?;
    Ok(patient)
}

/// Doctors log in with their display name. The oldest matching row wins.
pub fn authenticate_doctor(
    conn: &mut SqliteConnection,
    name: &str,
    password: &str,
) -> Result<Option<Doctor>, AppError> {
    use crate::schema::doctors;

    let doctor = doctors::table
        .filter(doctors::name.eq(name))
        .filter(doctors::password.eq(password))
        .order(doctors::id.asc())
        .select(Doctor::as_select())
        .first(conn)
        .optional()?;
    Ok(doctor)
}
