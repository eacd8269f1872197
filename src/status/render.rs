//! Plain-text rendering of hardware snapshots.

use crate::status::data::{HardwareSnapshot, NetworkInterface};

/// Which snapshot fields to emit.
///
/// Built once from parsed CLI flags and passed into [`render`]. An empty
/// selection (or `all`) means the full snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    pub hostname: bool,
    pub model: bool,
    pub temperature: bool,
    pub celsius: bool,
    pub fahrenheit: bool,
    pub networking: bool,
    pub all: bool,
}

impl Selection {
    /// Whether no individual field was selected.
    pub fn is_empty(&self) -> bool {
        !(self.hostname
            || self.model
            || self.temperature
            || self.celsius
            || self.fahrenheit
            || self.networking)
    }
}

/// Render the selected fields of a snapshot.
///
/// Individual flags emit the bare value(s) in fixed order: hostname, model,
/// temperature (both units), Celsius, Fahrenheit, networking.
pub fn render(snapshot: &HardwareSnapshot, selection: Selection) -> String {
    if selection.all || selection.is_empty() {
        return render_full(snapshot);
    }

    let (celsius, fahrenheit) = temperature_displays(snapshot);
    let mut sections = Vec::new();
    if selection.hostname {
        sections.push(snapshot.hostname.clone());
    }
    if selection.model {
        sections.push(snapshot.model.clone());
    }
    if selection.temperature {
        sections.push(if snapshot.temperature.is_some() {
            format!("{} {}", celsius, fahrenheit)
        } else {
            String::new()
        });
    }
    if selection.celsius {
        sections.push(celsius);
    }
    if selection.fahrenheit {
        sections.push(fahrenheit);
    }
    if selection.networking {
        sections.push(render_networking(&snapshot.interfaces));
    }
    sections.join("\n")
}

/// Render the full snapshot as fixed-width labeled lines plus the
/// networking table.
pub fn render_full(snapshot: &HardwareSnapshot) -> String {
    let (celsius, fahrenheit) = temperature_displays(snapshot);
    let mut out = String::new();
    out.push_str(&format!("{:<12.12}: {}\n", "Hostname", snapshot.hostname));
    out.push_str(&format!("{:<12.12}: {}\n", "Model", snapshot.model));
    out.push_str(&format!(
        "{:<12.12}: {} {}\n",
        "Temperature", celsius, fahrenheit
    ));
    out.push_str(&format!("{:<12.12}:\n", "Networking"));
    out.push_str(&render_networking(&snapshot.interfaces));
    out
}

/// Render the networking table: two header lines, then one row per
/// interface, newline-joined with no trailing newline.
pub fn render_networking(interfaces: &[NetworkInterface]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        " {:<8.8} {:<8.8} {}\n",
        "Name", "State", "IP Address"
    ));
    out.push_str(&format!(" {:<8.8} {:<8.8} {}\n", "----", "-----", "----------"));
    let rows: Vec<String> = interfaces
        .iter()
        .map(|nic| format!(" {:<8.8} {:<8.8} {}", nic.name, nic.state, nic.address))
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

fn temperature_displays(snapshot: &HardwareSnapshot) -> (String, String) {
    match &snapshot.temperature {
        Some(temp) => (temp.celsius_display(), temp.fahrenheit_display()),
        None => (String::new(), String::new()),
    }
}
