/// Row limit for list output: `--limit` on the command, then the global
/// `--limit`, then `general.default_limit` from config. Never below one.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> u32 {
    local.or(global).unwrap_or(configured).max(1)
}
