use crate::schema::doctors;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = doctors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = doctors)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub password: String,
}
