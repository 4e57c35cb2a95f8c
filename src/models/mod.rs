pub mod favorite;
pub mod gif;
pub mod search;

pub use favorite::{FavoriteRecord, NewFavorite};
pub use gif::{Gif, GifPage, Pagination};
pub use search::{NewSearch, SearchRecord};
