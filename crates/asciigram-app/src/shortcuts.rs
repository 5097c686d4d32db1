//! Key binding registry and documentation.

/// A key binding.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, shift: bool, description: &'static str) -> Self {
        Self {
            key,
            shift,
            description,
        }
    }

    /// Format the binding for display (e.g. "Shift+H").
    pub fn format(&self) -> String {
        if self.shift {
            format!("Shift+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Bindings of one mode or pop-up.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

impl Section {
    fn new(title: &'static str, shortcuts: Vec<Shortcut>) -> Self {
        Self { title, shortcuts }
    }
}

/// Registry of every key binding, grouped by where it applies.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Section> {
        vec![
            Section::new(
                "Everywhere",
                vec![
                    Shortcut::new("h j k l", false, "Move the cursor (arrow keys work too)"),
                    Shortcut::new("H J K L", true, "Scroll the whole drawing"),
                    Shortcut::new("Escape", false, "Back to normal mode"),
                    Shortcut::new("?", false, "Show this help"),
                    Shortcut::new("q", false, "Quit"),
                ],
            ),
            Section::new(
                "Normal mode",
                vec![
                    Shortcut::new("b", false, "Draw a box"),
                    Shortcut::new("a", false, "Draw an arrow"),
                    Shortcut::new("i", false, "Type text"),
                    Shortcut::new("v", false, "Select a region"),
                    Shortcut::new("m", false, "Move the element under the cursor"),
                    Shortcut::new("x", false, "Cut the element under the cursor"),
                    Shortcut::new("y", false, "Yank the element under the cursor"),
                    Shortcut::new("p", false, "Paste at the cursor"),
                    Shortcut::new("< >", false, "Lower / raise the element under the cursor"),
                    Shortcut::new("G", true, "Ungroup the group under the cursor"),
                    Shortcut::new("s", false, "Edit box styles"),
                    Shortcut::new("S", true, "Edit arrow styles"),
                ],
            ),
            Section::new(
                "Box mode",
                vec![
                    Shortcut::new("b", false, "Finish the box"),
                    Shortcut::new("o", false, "Jump to the opposite corner"),
                    Shortcut::new("O", true, "Jump to the opposite side"),
                    Shortcut::new("x", false, "Discard the box"),
                ],
            ),
            Section::new(
                "Arrow mode",
                vec![
                    Shortcut::new("a", false, "Add a waypoint (twice in place to finish)"),
                    Shortcut::new("o", false, "Bend the last segment the other way"),
                    Shortcut::new("x", false, "Discard the arrow"),
                ],
            ),
            Section::new(
                "Insert mode",
                vec![
                    Shortcut::new("Enter", false, "New line"),
                    Shortcut::new("Backspace", false, "Delete the last character"),
                ],
            ),
            Section::new(
                "Move mode",
                vec![
                    Shortcut::new("h j k l", false, "Move the element"),
                    Shortcut::new("m", false, "Drop it"),
                ],
            ),
            Section::new(
                "Visual mode",
                vec![
                    Shortcut::new("g", false, "Group touched elements"),
                    Shortcut::new("x", false, "Delete touched elements"),
                    Shortcut::new("y", false, "Yank touched elements as a group"),
                    Shortcut::new("c", false, "Copy the region as text"),
                    Shortcut::new("o", false, "Jump to the opposite corner"),
                    Shortcut::new("O", true, "Jump to the opposite side"),
                    Shortcut::new("v", false, "Back to normal mode"),
                ],
            ),
            Section::new(
                "Style editor",
                vec![
                    Shortcut::new("1-9 a b", false, "Pick a slot, then type its glyph"),
                    Shortcut::new("Backspace", false, "Make the picked slot transparent"),
                    Shortcut::new("+", false, "Duplicate the current style"),
                    Shortcut::new("[ ]", false, "Previous / next style"),
                    Shortcut::new("s", false, "Close (q and Escape work too)"),
                ],
            ),
        ]
    }

    /// Help text, one entry per line.
    pub fn help_lines() -> Vec<String> {
        let mut lines = Vec::new();
        for section in Self::all() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("{}:", section.title));
            for shortcut in &section.shortcuts {
                lines.push(format!("  {:12} {}", shortcut.format(), shortcut.description));
            }
        }
        lines
    }

    /// Print all bindings to stdout.
    pub fn print_all() {
        println!("\n=== Key Bindings ===");
        for line in Self::help_lines() {
            println!("{line}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(Shortcut::new("G", true, "").format(), "Shift+G");
        assert_eq!(Shortcut::new("x", false, "").format(), "x");
    }

    #[test]
    fn test_help_lines_have_section_headers() {
        let lines = ShortcutRegistry::help_lines();
        assert_eq!(lines[0], "Everywhere:");
        assert!(lines.iter().any(|line| line == "Visual mode:"));
        assert!(lines.iter().any(|line| line.contains("Quit")));
    }
}
