//! Display session detection.

/// Display server type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Windows,
    MacOS,
    Unknown,
}

impl std::fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DisplayServer::Wayland => "Wayland",
            DisplayServer::X11 => "X11",
            DisplayServer::Windows => "Windows",
            DisplayServer::MacOS => "macOS",
            DisplayServer::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if cfg!(target_os = "windows") {
        return DisplayServer::Windows;
    }
    if cfg!(target_os = "macos") {
        return DisplayServer::MacOS;
    }
    from_session_env(
        std::env::var("WAYLAND_DISPLAY").ok().as_deref(),
        std::env::var("DISPLAY").ok().as_deref(),
        std::env::var("XDG_SESSION_TYPE").ok().as_deref(),
    )
}

/// Classify a Unix desktop session from its environment variables.
fn from_session_env(
    wayland_display: Option<&str>,
    x_display: Option<&str>,
    session_type: Option<&str>,
) -> DisplayServer {
    let set = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());

    if set(wayland_display) || session_type == Some("wayland") {
        DisplayServer::Wayland
    } else if set(x_display) || session_type == Some("x11") {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}
