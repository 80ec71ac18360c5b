pub mod probing_table;
