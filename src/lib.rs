pub mod domain;
pub mod utils;

pub use domain::entities::Url;
pub use utils::error::{ClientError, Result};
