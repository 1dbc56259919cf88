pub mod http;
pub mod traits;

pub use http::HttpAdminApi;
pub use traits::AdminApi;
