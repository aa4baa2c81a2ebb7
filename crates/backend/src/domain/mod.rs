pub mod a001_custom_field;
