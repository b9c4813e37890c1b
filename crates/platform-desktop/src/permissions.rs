//! Permission detection and guidance for input injection.
//!
//! Moving the cursor needs a graphical session plus, depending on the
//! platform, an explicit grant (macOS Accessibility, a libei-capable
//! Wayland compositor).

use crate::display::DisplayServer;

/// A system capability nudge may need.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check the capabilities that can be verified before the first move.
pub fn check_capabilities(server: DisplayServer) -> Vec<Capability> {
    vec![check_session(server)]
}

/// Whether every required capability is available.
pub fn all_required_available(capabilities: &[Capability]) -> bool {
    capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available)
}

fn check_session(server: DisplayServer) -> Capability {
    let available = server != DisplayServer::Unknown;

    Capability {
        name: "Graphical Session".to_string(),
        description: format!("Display server: {server}"),
        available,
        required: true,
        fix_instructions: if available {
            None
        } else {
            Some(
                "Run nudge from inside a desktop session (DISPLAY or WAYLAND_DISPLAY must be set)"
                    .to_string(),
            )
        },
    }
}

/// Guidance for the per-platform input grant.
///
/// Only the compositor or OS knows whether the grant exists, so this is a
/// hint, not a check. `None` when the session needs no extra grant.
pub fn injection_grant_hint(server: DisplayServer) -> Option<&'static str> {
    match server {
        DisplayServer::MacOS => {
            Some("Grant Accessibility access: System Settings > Privacy & Security > Accessibility")
        }
        DisplayServer::Wayland => {
            Some("The compositor must allow input emulation (libei / RemoteDesktop portal)")
        }
        _ => None,
    }
}

/// One-line hint appended to the fatal "cannot control cursor" error.
pub fn denial_hint(server: DisplayServer) -> String {
    check_capabilities(server)
        .into_iter()
        .filter(|c| !c.available)
        .filter_map(|c| c.fix_instructions)
        .chain(injection_grant_hint(server).map(str::to_string))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if !cap.available {
            if let Some(ref fix) = cap.fix_instructions {
                println!("    Fix: {fix}");
            }
        }
    }
}
