use serde::Serialize;

use crate::models::appointments::Appointment;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}

#[derive(Debug, Default, Serialize)]
pub struct AppointmentItem {
    pub id: i32,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub problem: String,
    pub report: Option<String>,
    pub suggestion: Option<String>,
    pub medicine: Option<String>,
    pub ai_analysis: Option<String>,
}

impl From<Appointment> for AppointmentItem {
    fn from(appo: Appointment) -> Self {
        Self {
            id: appo.id,
            patient_name: appo.patient_name,
            doctor_name: appo.doctor_name.unwrap_or_default(),
            date: appo.date.unwrap_or_default(),
            time: appo.time.unwrap_or_default(),
            problem: appo.problem,
            report: appo.report,
            suggestion: appo.suggestion,
            medicine: appo.medicine,
            ai_analysis: appo.ai_analysis,
        }
    }
}

pub fn appointment_items(appos: Vec<Appointment>) -> Vec<AppointmentItem> {
    appos.into_iter().map(AppointmentItem::from).collect()
}
