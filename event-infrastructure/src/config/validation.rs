use anyhow::{anyhow, Result};

pub const MAX_NEWEST_LIMIT: usize = 200;

pub fn validate_newest_limit(value: usize) -> Result<()> {
    if value == 0 || value > MAX_NEWEST_LIMIT {
        return Err(anyhow!(
            "newest_limit must be between 1 and {}",
            MAX_NEWEST_LIMIT
        ));
    }
    Ok(())
}
