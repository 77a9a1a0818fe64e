mod client;
mod fetcher;
mod iss_now_response;

pub use client::{OpenNotifyClientError, new_client};
pub use fetcher::{FetchError, fetch};
