use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle() -> AppResult<()> {
    let path = Config::init_all()?;
    success(format!("Configuration created: {}", path.display()));
    Ok(())
}
