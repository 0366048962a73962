pub mod result_storage;
