//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it; repositories convert them into domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    City, CityId, CityName, CityValidationError, Picnic, PicnicId, PicnicRegistration,
    RegistrationId, User, UserId,
};

use super::schema::{cities, picnic_registrations, picnics, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CityRow {
    pub id: i32,
    pub name: String,
    pub weather: Option<String>,
}

impl TryFrom<CityRow> for City {
    type Error = CityValidationError;

    fn try_from(row: CityRow) -> Result<Self, Self::Error> {
        Ok(City {
            id: CityId::new(row.id),
            name: CityName::parse(&row.name)?,
            weather: row.weather,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cities)]
pub(crate) struct NewCityRow<'a> {
    pub name: &'a str,
    pub weather: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub age: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            name: row.name,
            surname: row.surname,
            age: row.age,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub age: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = picnics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PicnicRow {
    pub id: i32,
    pub city_id: i32,
    pub time: DateTime<Utc>,
}

impl From<PicnicRow> for Picnic {
    fn from(row: PicnicRow) -> Self {
        Picnic {
            id: PicnicId::new(row.id),
            city_id: CityId::new(row.city_id),
            time: row.time,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = picnics)]
pub(crate) struct NewPicnicRow {
    pub city_id: i32,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = picnic_registrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegistrationRow {
    pub id: i32,
    pub user_id: i32,
    pub picnic_id: i32,
}

impl From<RegistrationRow> for PicnicRegistration {
    fn from(row: RegistrationRow) -> Self {
        PicnicRegistration {
            id: RegistrationId::new(row.id),
            user_id: UserId::new(row.user_id),
            picnic_id: PicnicId::new(row.picnic_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = picnic_registrations)]
pub(crate) struct NewRegistrationRow {
    pub user_id: i32,
    pub picnic_id: i32,
}
