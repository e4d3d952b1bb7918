pub mod cursor;
pub mod navbar;
pub mod scroll;
