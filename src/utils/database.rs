use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error connecting to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("{:}", err);
            Error::Connect(err)
        })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::from(err)
    })
}

/// Maps a string-backed enum onto a TEXT/VARCHAR column. The type must
/// implement `FromStr<Err = String>`; writes bind `as_str()` explicitly.
#[macro_export]
macro_rules! text_column {
    ($ty:ty) => {
        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> std::result::Result<Self, sqlx::error::BoxDynError> {
                let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                Ok(raw.parse::<$ty>()?)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use sqlx::{Postgres, Type};
    use std::str::FromStr;

    #[allow(dead_code)]
    type Result<T> = std::result::Result<T, ()>;

    #[derive(Debug, PartialEq)]
    enum Flavor {
        Sweet,
        Sour,
    }

    impl FromStr for Flavor {
        type Err = String;

        fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
            match s {
                "sweet" => Ok(Flavor::Sweet),
                "sour" => Ok(Flavor::Sour),
                _ => Err(format!("'{}' is not a valid Flavor", s)),
            }
        }
    }

    crate::text_column!(Flavor);

    #[test]
    fn text_columns_coexist_with_local_result_aliases() {
        let text = <String as Type<Postgres>>::type_info();
        assert!(<Flavor as Type<Postgres>>::compatible(&text));
        assert_eq!("sour".parse::<Flavor>(), Ok(Flavor::Sour));
    }
}
