pub mod data;
pub mod payment;
pub mod rows;
pub mod session;
pub mod ui;
