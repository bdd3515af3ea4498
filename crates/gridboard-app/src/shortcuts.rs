//! Keyboard shortcut registry and documentation.

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    /// Ctrl, or Cmd on macOS.
    pub command: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, command: bool, description: &'static str) -> Self {
        Self {
            key,
            command,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+C").
    pub fn format(&self) -> String {
        if self.command {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Registry of all canvas shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("0", true, "Reset zoom and pan"),
            Shortcut::new("C", true, "Copy selected shape"),
            Shortcut::new("V", true, "Paste shape (offset +40, +40)"),
            Shortcut::new("Wheel", true, "Zoom about the cursor"),
            Shortcut::new("Double-click", false, "Place a shape with the active tool"),
            Shortcut::new("Middle drag", false, "Pan the view"),
            Shortcut::new("Right click", false, "Select without moving"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
