use serde::Serialize;

use crate::protocol::AppointmentItem;

#[derive(Default, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub err: String,
    pub patient: String,
    pub appointments: Vec<AppointmentItem>,
    pub reviews: Vec<AppointmentItem>,
}

#[derive(Default, Serialize)]
pub struct AiAnalysisResponse {
    pub success: bool,
    pub err: String,
    pub appointment_id: i32,
    pub diagnosis: String,
    pub medicine: String,
}
