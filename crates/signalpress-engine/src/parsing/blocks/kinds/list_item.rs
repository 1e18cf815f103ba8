/// Unordered list item type. Only the `- ` marker is produced upstream.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";

    /// Returns the byte offset where the item text begins.
    pub fn content_offset(line: &str) -> Option<usize> {
        let rest = line.strip_prefix(Self::MARKER)?;
        (!rest.trim().is_empty()).then_some(Self::MARKER.len())
    }
}
