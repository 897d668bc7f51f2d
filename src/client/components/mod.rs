pub mod elo_badge;
pub mod lineup_table;
pub mod navbar;
pub mod page;
pub mod player_table;
pub mod section;
pub mod user_avatar;

pub use elo_badge::EloBadge;
pub use lineup_table::LineupTable;
pub use navbar::Navbar;
pub use page::Page;
pub use player_table::PlayerTable;
pub use section::Section;
pub use user_avatar::UserAvatar;
