mod health;
mod hostname;
mod logging;

pub use health::health_check;
pub use hostname::{ServerAddrError, get_server_addr, server_addr};
pub use logging::setup_logging;
