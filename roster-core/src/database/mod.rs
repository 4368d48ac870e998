pub mod ports;
pub mod sqlite;

pub use ports::users::UsersRepository;
pub use sqlite::users::SqliteUsersRepository;
