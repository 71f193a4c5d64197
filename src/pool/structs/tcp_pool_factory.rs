use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct TcpPoolFactory {
    pub connect_timeout: Duration,
}
