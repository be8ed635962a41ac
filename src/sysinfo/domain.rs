//! System descriptor and report formatting.

/// Text returned when the OS cannot be queried.
pub const FALLBACK_REPORT: &str = "Unable to retrieve system information";

/// Size of the report buffer, terminator included.
pub const REPORT_CAPACITY: usize = 512;

/// Identification fields of the running host, as reported by `uname(2)`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SystemDescriptor {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

impl SystemDescriptor {
    /// Render the five-line report, truncated to fit [`REPORT_CAPACITY`].
    pub fn report(&self) -> String {
        let full = format!(
            "System: {}\nNode: {}\nRelease: {}\nVersion: {}\nMachine: {}",
            self.sysname, self.nodename, self.release, self.version, self.machine
        );
        truncate_to(full, REPORT_CAPACITY - 1)
    }
}

/// Cut `text` to at most `max` bytes without splitting a character.
pub(crate) fn truncate_to(mut text: String, max: usize) -> String {
    if text.len() <= max {
        return text;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_box() -> SystemDescriptor {
        SystemDescriptor {
            sysname: "Linux".into(),
            nodename: "build-01".into(),
            release: "6.1.0".into(),
            version: "#1 SMP PREEMPT_DYNAMIC".into(),
            machine: "x86_64".into(),
        }
    }

    #[test]
    fn five_labelled_lines() {
        let report = linux_box().report();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "System: Linux",
                "Node: build-01",
                "Release: 6.1.0",
                "Version: #1 SMP PREEMPT_DYNAMIC",
                "Machine: x86_64",
            ]
        );
    }

    #[test]
    fn overlong_fields_are_truncated() {
        let mut desc = linux_box();
        desc.version = "v".repeat(1024);
        let report = desc.report();
        assert_eq!(report.len(), REPORT_CAPACITY - 1);
        assert!(report.starts_with("System: Linux\nNode: build-01\n"));
        assert!(!report.contains("Machine:"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(10);
        let cut = truncate_to(text, 5);
        assert_eq!(cut, "éé");
    }
}
