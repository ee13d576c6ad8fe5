pub mod migrate;
pub mod postgres;

pub use migrate::migrate;
pub use postgres::PgStore;
