pub mod bearer;
pub mod claims;
pub mod errors;
pub mod service;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use errors::TokenError;
pub use service::TokenService;
pub use service::DEFAULT_TOKEN_VALIDITY_HOURS;
pub use service::MAX_TOKEN_VALIDITY_HOURS;
