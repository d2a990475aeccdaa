pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the line opens or closes a fence.
    ///
    /// Only the line start is checked: ```` ```rust ```` and ```` ```` ```` both count.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// Info string following an opening fence, `None` when blank.
    pub fn info(line: &str) -> Option<String> {
        let info = line.strip_prefix(Self::BACKTICKS)?.trim();
        if info.is_empty() {
            None
        } else {
            Some(info.to_string())
        }
    }
}
