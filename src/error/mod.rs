mod bazaar;

pub use bazaar::{ApiErrorBody, ApiErrorObject, BazaarError};
