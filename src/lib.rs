mod route;
pub mod server;
