use crate::schema::appointments;
use diesel::prelude::*;

/// `patient_name` and `doctor_name` are copies of display names, not
/// references into `patients`/`doctors`.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Appointment {
    pub id: i32,
    pub patient_name: String,
    pub doctor_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub problem: String,
    pub report: Option<String>,
    pub suggestion: Option<String>,
    pub medicine: Option<String>,
    pub ai_analysis: Option<String>,
}

#[derive(Insertable, Default)]
#[diesel(table_name = appointments)]
pub struct NewAppointment {
    pub patient_name: String,
    pub doctor_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub problem: String,
    pub report: Option<String>,
    pub medicine: Option<String>,
    pub ai_analysis: Option<String>,
}
