//! Declarative safety rule tables.
//!
//! Rules are data, not code: the analyzer walks an ordered [`RuleSet`] and
//! knows nothing about individual signatures, so tests can swap in custom
//! tables without touching the matching or merge logic.
//!
//! Attention rules are substring/regex matches anywhere in the command
//! (privilege escalation can hide as an argument of a benign-looking
//! invocation). Safe rules are anchored at the start of the command so a
//! literal `ls` buried inside a destructive pipeline never counts as safe.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SafetyLevel;

/// An ordered, named matcher with a category tag.
#[derive(Debug, Clone)]
pub struct SafetyRule {
    pub category: &'static str,
    pub pattern: Regex,
    pub level: SafetyLevel,
}

impl SafetyRule {
    pub fn new(
        category: &'static str,
        level: SafetyLevel,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            category,
            pattern: Regex::new(pattern)?,
            level,
        })
    }

    pub fn is_match(&self, command: &str) -> bool {
        self.pattern.is_match(command)
    }
}

/// Ordered rule tables evaluated by the analyzer: attention rules strictly
/// before safe rules, first match wins within each table.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub attention: Vec<SafetyRule>,
    pub safe: Vec<SafetyRule>,
}

impl RuleSet {
    /// The built-in tables. Compiled once; clones share the compiled regexes.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }
}

/// `(category, pattern)` signatures that require user attention.
const ATTENTION_PATTERNS: &[(&str, &str)] = &[
    ("privilege escalation", r"\bsudo\b"),
    ("privilege escalation", r"\bdoas\b"),
    (
        "destructive file operation",
        r"\brm\s+(\S+\s+)*(--recursive|--force|-[a-zA-Z]*[rf][a-zA-Z]*)(\s|$)",
    ),
    ("disk-level write", r"\bdd\s+.*\bof=/dev/(sd|hd|vd|nvme|mmcblk)"),
    ("disk-level write", r">\s*/dev/(sd|hd|vd|nvme|mmcblk)"),
    ("filesystem formatting", r"\bmkfs\b"),
    ("disk partitioning", r"\bfdisk\b"),
    ("secure erase", r"\bshred\b"),
    ("secure erase", r"\bwipe\b"),
    (
        "world-writable permissions",
        r"\bchmod\s+(-[a-zA-Z]+\s+)*0?777\b",
    ),
    ("pipe to shell", r"\b(curl|wget)\b.*\|\s*(sudo\s+)?(ba|z)?sh\b"),
    ("remote script execution", r"\$\(\s*(curl|wget)\b"),
    ("remote script execution", r"\b(ba|z)?sh\b[^|]*<\(\s*(curl|wget)\b"),
    (
        "service management",
        r"\bsystemctl\s+(start|stop|restart|enable|disable)\b",
    ),
    (
        "package management",
        r"\bapt(-get)?\s+(install|remove|purge|update|upgrade|autoremove)\b",
    ),
    (
        "package management",
        r"\b(yum|dnf)\s+(install|remove|update|upgrade)\b",
    ),
    ("package management", r"\bpacman\s+-S\w*\b"),
    ("kernel module loading", r"\bmodprobe\b"),
    ("filesystem mount", r"\bmount\b"),
    ("filesystem mount", r"\bumount\b"),
    ("firewall change", r"\biptables\b"),
];

/// `(category, pattern)` signatures for read-only/inspection commands,
/// anchored at the command name.
const SAFE_PATTERNS: &[(&str, &str)] = &[
    ("file listing", r"^ls\b"),
    ("navigation", r"^cd\b"),
    ("working directory", r"^pwd\b"),
    ("output", r"^echo\b"),
    ("file viewing", r"^cat\b"),
    ("file viewing", r"^head\b"),
    ("file viewing", r"^tail\b"),
    ("text search", r"^grep\b"),
    ("file search", r"^find\b"),
    (
        "read-only git inspection",
        r"^git\s+(status|log|diff|branch|show)\b",
    ),
    ("process listing", r"^ps\b"),
    ("process listing", r"^top\b"),
    ("command lookup", r"^which\b"),
    ("command lookup", r"^whereis\b"),
    ("documentation", r"^man\b"),
    ("documentation", r"^help\b"),
    ("service status query", r"^systemctl\s+status\b"),
    ("disk usage", r"^df\b"),
    ("disk usage", r"^du\b"),
    ("file inspection", r"^wc\b"),
    ("file inspection", r"^file\b"),
    ("file inspection", r"^stat\b"),
    ("system information", r"^uname\b"),
    ("system information", r"^whoami\b"),
    ("system information", r"^date\b"),
    ("system information", r"^env\b"),
    ("system information", r"^history\b"),
];

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    let compile = |level: SafetyLevel, table: &[(&'static str, &str)]| {
        table
            .iter()
            .map(|&(category, pattern)| {
                SafetyRule::new(category, level, pattern)
                    .expect("builtin safety rule pattern must compile")
            })
            .collect()
    };

    RuleSet {
        attention: compile(SafetyLevel::Attention, ATTENTION_PATTERNS),
        safe: compile(SafetyLevel::Safe, SAFE_PATTERNS),
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_compile() {
        let rules = RuleSet::builtin();
        assert!(!rules.attention.is_empty());
        assert!(!rules.safe.is_empty());
        assert!(rules
            .attention
            .iter()
            .all(|rule| rule.level == SafetyLevel::Attention));
        assert!(rules.safe.iter().all(|rule| rule.level == SafetyLevel::Safe));
    }

    #[test]
    fn plain_rm_without_flags_is_not_an_attention_signature() {
        let rules = RuleSet::builtin();
        assert!(!rules.attention.iter().any(|r| r.is_match("rm my-file.txt")));
        assert!(rules.attention.iter().any(|r| r.is_match("rm -rf /")));
    }
}
