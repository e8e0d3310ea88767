pub mod kvp_writer;
