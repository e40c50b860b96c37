/// The branch being built, with its trunk status resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_trunk: bool,
}

impl BranchContext {
    /// Create a branch context, recognising `trunk` either bare or under a remote
    /// (`master`, `origin/master`)
    pub fn new(name: impl Into<String>, trunk: &str) -> Self {
        let name_str: String = name.into();
        let name_str = name_str.trim().to_string();
        let is_trunk = !trunk.is_empty()
            && (name_str == trunk
                || name_str
                    .strip_suffix(trunk)
                    .is_some_and(|prefix| prefix.ends_with('/')));

        BranchContext {
            name: name_str,
            is_trunk,
        }
    }

    /// Check if this is the main development line
    pub fn is_trunk(&self) -> bool {
        self.is_trunk
    }
}
