//! The place entity

use std::fmt;

use sqlx::FromRow;

/// Row in `<schema>.place`. `city` is nullable.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Place {
    pub id: i32,
    pub country: String,
    pub city: Option<String>,
    pub telcode: i32,
}

/// A place to insert; `id` is generated by the database.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub country: String,
    pub city: Option<String>,
    pub telcode: i32,
}

impl fmt::Display for Place {
    /// Console rendering: `country, city, telcode`, with a NULL city as `N.A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.country,
            self.city.as_deref().unwrap_or("N.A"),
            self.telcode
        )
    }
}
