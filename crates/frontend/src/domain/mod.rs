pub mod a101_order;
