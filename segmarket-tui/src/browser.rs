use anyhow::{bail, Context, Result};

/// Open a URL in the system default browser.
///
/// Only `http` and `https` links are handed to the OS.
pub fn open_browser(url: &str) -> Result<()> {
    if !is_web_link(url) {
        bail!("Refusing to open non-web link: {}", url);
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");
    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/c", "start", ""]);
        c
    };

    command
        .arg(url)
        .spawn()
        .with_context(|| format!("Failed to launch browser for {}", url))?;
    Ok(())
}

fn is_web_link(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
