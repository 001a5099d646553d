pub mod drives_json;

pub use drives_json::{compute_drives_json, DrivesRequest, DrivesResponse};
