pub mod hashing;
pub mod logs;

pub mod requests {
    pub mod registration_request;
}
