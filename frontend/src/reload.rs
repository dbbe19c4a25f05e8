use shared::{Reloader, Result, ToggleError};

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowReloader;

impl Reloader for WindowReloader {
    fn reload(&self) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| ToggleError::Reload("no window".into()))?;
        window
            .location()
            .reload()
            .map_err(|e| ToggleError::Reload(format!("{:?}", e)))
    }
}
