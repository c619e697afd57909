pub mod request_id;

pub use request_id::{RequestId, RequestIdExt};

#[cfg(test)]
mod request_id_tests;
