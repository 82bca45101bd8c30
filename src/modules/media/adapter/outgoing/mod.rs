mod data_url_storage;

pub use data_url_storage::DataUrlStorage;
