use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum UploadSource<'a> {
    Buffer(&'a [u8]),
    File(&'a Path),
}
