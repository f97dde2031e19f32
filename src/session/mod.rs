pub mod claims;
pub mod session;

pub use claims::{decode_claims, Claims, Role};
pub use session::{AuthData, CredentialError, Session};
