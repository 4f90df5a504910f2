use ypg_core::Identity;

/// Result of hydrating the session - distinguishes "logged out" from a discarded record.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a stored record existed but could not be parsed
    pub corruption_error: Option<String>,
}
