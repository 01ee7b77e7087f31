//! SQL builder for store lookups.
//!
//! Starts from the fixed stores ⋈ availability ⋈ medicines join and appends
//! one bound predicate per present filter, ANDed together. User input only
//! ever reaches the database through `$n` placeholders.
//!
//! The tables belong to another system, so column types are not assumed:
//! selected columns are cast to the types the row decoder expects, and every
//! placeholder carries an explicit type so the untyped prepare never infers a
//! narrower one from the column (e.g. `INTEGER` for an `i64` bind).

use super::escape::contains_pattern;
use super::params::StoreFilter;

/// Hard cap on rows returned by a single lookup.
pub const MAX_ROWS: usize = 50;

const BASE_QUERY: &str = "SELECT \
     s.id::BIGINT AS id, \
     s.store_name::TEXT AS store_name, \
     s.address::TEXT AS address, \
     s.contact::TEXT AS contact, \
     s.pincode::TEXT AS pincode, \
     m.medicine_name::TEXT AS medicine_name, \
     m.brand_name::TEXT AS brand_name, \
     m.strength::TEXT AS strength, \
     m.price::NUMERIC AS price \
     FROM medical_stores s \
     JOIN medicine_availability ma ON s.id = ma.store_id \
     JOIN medicines m ON ma.medicine_id = m.id";

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

fn push_int(bind_params: &mut Vec<BindValue>, value: i64) -> usize {
    bind_params.push(BindValue::Int(value));
    bind_params.len()
}

pub struct StoreQueryBuilder<'a> {
    filter: &'a StoreFilter,
}

impl<'a> StoreQueryBuilder<'a> {
    pub fn new(filter: &'a StoreFilter) -> Self {
        Self { filter }
    }

    /// Build the SQL text and its positional bind values.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut bind_params = Vec::new();
        let mut where_clauses = Vec::new();

        if let Some(name) = &self.filter.medicine_name {
            let idx = push_text(&mut bind_params, contains_pattern(name));
            where_clauses.push(format!(
                "m.medicine_name::TEXT ILIKE ${}::TEXT ESCAPE E'\\\\'",
                idx
            ));
        }

        if let Some(id) = self.filter.medicine_id {
            let idx = push_int(&mut bind_params, id);
            where_clauses.push(format!("ma.medicine_id = ${}::BIGINT", idx));
        }

        if let Some(pincode) = &self.filter.pincode {
            let idx = push_text(&mut bind_params, pincode.clone());
            where_clauses.push(format!("s.pincode::TEXT = ${}::TEXT", idx));
        }

        let mut sql = String::from(BASE_QUERY);
        if !where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY s.id, m.id");
        sql.push_str(&format!(" LIMIT {}", MAX_ROWS));

        (sql, bind_params)
    }
}
