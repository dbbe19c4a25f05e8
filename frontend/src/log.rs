use web_sys::console;

pub fn info(message: &str) {
    console::log_1(&format!("[vswitch] {}", message).into());
}

pub fn warn(message: &str) {
    console::warn_1(&format!("[vswitch] {}", message).into());
}

pub fn error(message: &str) {
    console::error_1(&format!("[vswitch] {}", message).into());
}
