/// Number of GIFs requested per page, and the offset step for "load more".
pub const PAGE_SIZE: u32 = 20;

pub const RECENT_SEARCHES_LIMIT: usize = 10;

pub mod messages {

    pub const MISSING_QUERY: &str = "Query or emotion parameter is required";

    pub const SEARCH_FAILED: &str = "Could not fetch GIFs. Please try again.";

    pub const TRENDING_FAILED: &str = "Could not fetch trending GIFs. Please try again.";

    pub const FAVORITE_REMOVED: &str = "Removed from favorites.";

    pub const FAVORITE_NOT_FOUND: &str = "Favorite not found.";
}
