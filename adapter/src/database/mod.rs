use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{postgres::PgConnectOptions, PgPool, Postgres, QueryBuilder};

use kernel::model::list::CreatedRange;

pub mod model;

fn make_pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(&cfg.password)
        .database(&cfg.database)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Postgres>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    ConnectionPool(PgPool::connect_lazy_with(make_pg_connect_options(cfg)))
}

pub async fn migrate(pool: &ConnectionPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool.inner_ref()).await?;
    Ok(())
}

// Appends `AND <column> >= from AND <column> < to` for the bounds that are set.
// The builder must already contain a WHERE clause.
pub(crate) fn push_created_range(
    builder: &mut QueryBuilder<'_, Postgres>,
    column: &str,
    range: CreatedRange,
) {
    if let Some(from) = range.from {
        builder.push(format!(" AND {column} >= ")).push_bind(from);
    }
    if let Some(to) = range.to {
        builder.push(format!(" AND {column} < ")).push_bind(to);
    }
}

// `%query%` for ILIKE with `ESCAPE '\'`; wildcards in the query match literally.
pub(crate) fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_wrapped_in_wildcards() {
        assert_eq!(contains_pattern("gion"), "%gion%");
    }

    #[test]
    fn wildcards_in_the_query_are_escaped() {
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
