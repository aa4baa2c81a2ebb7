pub mod a001_custom_field;
pub mod order_total;
