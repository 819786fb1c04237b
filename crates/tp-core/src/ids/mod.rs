mod cancel_token;

pub use cancel_token::CancelToken;
