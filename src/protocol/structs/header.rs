#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub pkg_len: i64,
    pub cmd: u8,
    pub status: u8,
}
