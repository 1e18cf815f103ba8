/// `[text](url)`. Text must be non-empty.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// `![alt](url)`. Alt text may be empty.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
}
