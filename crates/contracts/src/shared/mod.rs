pub mod date_utils;
pub mod money;
pub mod table;
