mod catalog;
mod home;
mod map;

pub use catalog::Catalog;
pub use home::Home;
pub use map::Map;
