mod app_navbar;
pub use app_navbar::{register_nav, AppNavbar, NavBuilder};
