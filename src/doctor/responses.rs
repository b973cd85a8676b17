use serde::Serialize;

use crate::protocol::AppointmentItem;

#[derive(Default, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub err: String,
    pub doctor: String,
    pub appointments: Vec<AppointmentItem>,
}

#[derive(Default, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub err: String,
    pub appointment: AppointmentItem,
}
