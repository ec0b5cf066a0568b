pub mod url;

pub use url::Url;
