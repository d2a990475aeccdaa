pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static [u8] = b"**";
}
