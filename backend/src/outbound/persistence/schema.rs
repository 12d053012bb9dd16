//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the schema.

diesel::table! {
    /// Cities, unique by normalised name.
    cities (id) {
        id -> Int4,
        name -> Varchar,
        /// Weather snapshot captured when the row was created.
        weather -> Nullable<Varchar>,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        name -> Varchar,
        surname -> Varchar,
        age -> Int4,
    }
}

diesel::table! {
    /// Scheduled picnics. `city_id` carries no foreign key.
    picnics (id) {
        id -> Int4,
        city_id -> Int4,
        time -> Timestamptz,
    }
}

diesel::table! {
    /// User-to-picnic links. Neither reference carries a foreign key.
    picnic_registrations (id) {
        id -> Int4,
        user_id -> Int4,
        picnic_id -> Int4,
    }
}

diesel::allow_tables_to_appear_in_same_query!(cities, users, picnics, picnic_registrations);
