pub mod parliament_rest_client;

pub use parliament_rest_client::ParliamentRestClient;
