use crate::schema::sessions;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SessionData {
    pub token: String,
    pub role: String,
    pub name: String,
    pub login_time: NaiveDateTime,
}
