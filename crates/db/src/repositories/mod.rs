mod favorite_repo;
mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use user_repo::UserRepo;
