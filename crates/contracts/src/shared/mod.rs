pub mod order_total;
