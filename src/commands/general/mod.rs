pub mod avatar;
pub mod help;
pub mod impersonate;
pub mod ping;
pub mod say;
