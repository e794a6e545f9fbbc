pub mod dynamic_array;
