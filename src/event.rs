//! Claude Code hook event kinds
//!
//! The hook is registered once per lifecycle point and receives the event
//! name (and, for a few events, a phase) as command-line arguments.
//! See: https://docs.claude.com/en/docs/claude-code/hooks

/// Lifecycle point that triggered the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEventKind {
    PreToolUse,
    PostToolUse,
    UserPromptSubmit,
    Notification,
    Stop,
    SubagentStop,
    PreCompact,
    SessionStart,
    SessionEnd,
}

impl HookEventKind {
    pub const ALL: [HookEventKind; 9] = [
        Self::PreToolUse,
        Self::PostToolUse,
        Self::UserPromptSubmit,
        Self::Notification,
        Self::Stop,
        Self::SubagentStop,
        Self::PreCompact,
        Self::SessionStart,
        Self::SessionEnd,
    ];

    /// Parse the event name exactly as Claude Code spells it.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Event name as it appears in hook configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::PreToolUse => "PreToolUse",
            Self::PostToolUse => "PostToolUse",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::Notification => "Notification",
            Self::Stop => "Stop",
            Self::SubagentStop => "SubagentStop",
            Self::PreCompact => "PreCompact",
            Self::SessionStart => "SessionStart",
            Self::SessionEnd => "SessionEnd",
        }
    }

    /// Fragment of the event's section in the hooks reference.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::PreToolUse => "pretooluse",
            Self::PostToolUse => "posttooluse",
            Self::UserPromptSubmit => "userpromptsubmit",
            Self::Notification => "notification",
            Self::Stop => "stop",
            Self::SubagentStop => "subagentstop",
            Self::PreCompact => "precompact",
            Self::SessionStart => "sessionstart",
            Self::SessionEnd => "sessionend",
        }
    }
}

/// What triggered a `PreCompact` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactTrigger {
    /// User ran `/compact`
    Manual,
    /// Context window close to full
    Auto,
}

impl CompactTrigger {
    pub fn from_phase(phase: &str) -> Self {
        match phase {
            "manual" => Self::Manual,
            _ => Self::Auto,
        }
    }
}

/// How a session was started (the `SessionStart` matcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Startup,
    Resume,
    Clear,
    Compact,
    Other,
}

impl SessionSource {
    pub fn from_phase(phase: &str) -> Self {
        match phase {
            "startup" => Self::Startup,
            "resume" => Self::Resume,
            "clear" => Self::Clear,
            "compact" => Self::Compact,
            _ => Self::Other,
        }
    }
}
