pub mod method_table;
