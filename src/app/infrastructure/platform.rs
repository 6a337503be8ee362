use crate::app::domain::ColorMode;

/// Ask the desktop which color scheme the user prefers.
/// Falls back to `ColorMode::Light` when nothing can be detected.
pub fn detect_system_color_mode() -> ColorMode {
    let dark = prefers_dark();
    tracing::debug!(dark, "system color scheme detected");
    if dark { ColorMode::Dark } else { ColorMode::Light }
}

#[cfg(target_os = "windows")]
fn prefers_dark() -> bool {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .and_then(|key| key.get_value::<u32, _>("AppsUseLightTheme"))
        // AppsUseLightTheme: 0 = dark, 1 = light
        .map(|value| value == 0)
        .unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn prefers_dark() -> bool {
    // GNOME exposes the preference either through the theme name or color-scheme
    gsettings("gtk-theme").is_some_and(|theme| theme.to_lowercase().contains("dark"))
        || gsettings("color-scheme").is_some_and(|scheme| scheme.contains("prefer-dark"))
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn prefers_dark() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .is_some_and(|output| String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn prefers_dark() -> bool {
    false
}
