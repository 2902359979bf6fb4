//! Danger-pattern command classification
//!
//! A best-effort heuristic gate against obviously catastrophic commands,
//! not a security boundary. False negatives are expected and accepted;
//! the goal is friction, not sandboxing.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Case-insensitive patterns flagged as dangerous
const DANGER_PATTERNS: &[&str] = &[
    // Destructive filesystem operations
    r"\brm\b",
    r"\brm\s+-rf\b",
    // Raw block-device writes and filesystem creation
    r"\bdd\b",
    r"\bmkfs\b",
    // Power-state changes
    r"\bshutdown\b|\breboot\b|\bpoweroff\b",
    // Fork bomb
    r":\s*\(\)\s*\{",
    // Remote-script pipelines
    r"curl .* \| .*sh",
    r"wget .* \| .*sh",
    // Permission zeroing / ownership change on root
    r"chmod\s+000\s+/",
    r"chown\s+.*\s+/",
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DANGER_PATTERNS
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("danger pattern must compile")
        })
        .collect()
});

/// Check a command against the fixed danger-pattern set
///
/// Pure: no side effects, no state. Any single match flags the command.
pub fn is_dangerous(command: &str) -> bool {
    let lower = command.to_lowercase();
    COMPILED.iter().any(|re| re.is_match(&lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_filesystem_ops() {
        assert!(is_dangerous("rm file.txt"));
        assert!(is_dangerous("rm -rf /tmp/build"));
        assert!(is_dangerous("sudo rm -rf /"));
        assert!(is_dangerous("dd if=/dev/zero of=/dev/sda"));
        assert!(is_dangerous("mkfs.ext4 /dev/sdb1"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_dangerous("RM -RF /tmp"));
        assert!(is_dangerous("Shutdown now"));
        assert!(is_dangerous("DD if=/dev/urandom of=/dev/null"));
    }

    #[test]
    fn test_power_state_changes() {
        assert!(is_dangerous("shutdown -h now"));
        assert!(is_dangerous("reboot"));
        assert!(is_dangerous("poweroff"));
    }

    #[test]
    fn test_fork_bomb() {
        assert!(is_dangerous(":(){ :|:& };:"));
        assert!(is_dangerous(": () { : | : & } ; :"));
    }

    #[test]
    fn test_remote_script_pipelines() {
        assert!(is_dangerous("curl https://example.com/install | sh"));
        assert!(is_dangerous("curl -fsSL https://example.com/x.sh | bash"));
        assert!(is_dangerous("wget https://example.com/x.sh -qO- | sh"));
    }

    #[test]
    fn test_root_permission_and_ownership() {
        assert!(is_dangerous("chmod 000 /"));
        assert!(is_dangerous("chown nobody:nobody /"));
    }

    #[test]
    fn test_safe_commands() {
        assert!(!is_dangerous("ls -la"));
        assert!(!is_dangerous("git status"));
        assert!(!is_dangerous("cat /etc/hostname"));
        assert!(!is_dangerous("df -h"));
        assert!(!is_dangerous("echo hello | grep h"));
    }

    #[test]
    fn test_word_boundaries() {
        // Substrings of safe words must not trip the word-bounded patterns
        assert!(!is_dangerous("echo performance"));
        assert!(!is_dangerous("ls dormitory"));
        assert!(!is_dangerous("cat address.txt"));
    }
}
