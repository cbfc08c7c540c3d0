//! Order details UI: header summary, tabbed edit buffers, the three
//! line-item tables and the payment confirmation dialog.

mod line_table;
mod payment_dialog;
mod view;

pub use view::OrderDetails;
