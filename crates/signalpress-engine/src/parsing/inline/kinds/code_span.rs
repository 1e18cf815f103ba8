/// `` `code` `` spans. Nothing inside is parsed further.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
