use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use crate::{error::AppError, models::sessions::SessionData, session::Role};

/// Stores a new session for `name` and returns its token.
pub fn open(conn: &mut SqliteConnection, role: Role, name: &str) -> Result<String, AppError> {
    use crate::schema::sessions;

    let login_time = Utc::now().naive_utc();
    let salt: u64 = rand::random();
    let seed = format!("{}:{}:{}:{}", role, name, login_time, salt);
    let token = format!("{:x}", Blake2b::digest(seed.as_bytes()));

    let data = SessionData {
        token: token.clone(),
        role: role.to_string(),
        name: name.to_string(),
        login_time,
    };
    diesel::insert_into(sessions::table)
        .values(data)
        .execute(conn)?;

    Ok(token)
}

pub fn find(conn: &mut SqliteConnection, token: &str) -> Result<Option<SessionData>, AppError> {
    use crate::schema::sessions;

    let data = sessions::table
        .find(token)
        .select(SessionData::as_select())
        .first(conn)
        .optional()?;
    Ok(data)
}

pub fn close(conn: &mut SqliteConnection, token: &str) -> Result<(), AppError> {
    use crate::schema::sessions;

    diesel::delete(sessions::table.find(token)).execute(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_conn;

    #[test]
    fn open_find_close() {
        let mut conn = test_conn();
        let token = open(&mut conn, Role::Doctor, "House").unwrap();

        let data = find(&mut conn, &token).unwrap().unwrap();
        assert_eq!(data.name, "House");
        assert_eq!(data.role, "doctor");

        close(&mut conn, &token).unwrap();
        assert!(find(&mut conn, &token).unwrap().is_none());
    }

    #[test]
    fn tokens_differ_per_login() {
        let mut conn = test_conn();
        let first = open(&mut conn, Role::Patient, "Alice").unwrap();
        let second = open(&mut conn, Role::Patient, "Alice").unwrap();
        assert_ne!(first, second);
    }
}
