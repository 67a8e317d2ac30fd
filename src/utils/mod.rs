pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{append_access_token, is_same_origin};
