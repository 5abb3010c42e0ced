//! Human-readable descriptions and documentation links for hook events.
//!
//! Every resolver here is total: unknown event names fall back to a generic
//! description and the bare documentation URL.

use crate::event::{CompactTrigger, HookEventKind, SessionSource};

/// Language of descriptions, messages and documentation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

impl Locale {
    /// Resolve a locale from a `HOOKLOG_LANG` style value.
    ///
    /// Any value starting with `zh` (case-insensitive) selects Simplified
    /// Chinese; everything else is English.
    pub fn from_lang(lang: Option<&str>) -> Self {
        match lang {
            Some(l) if l.trim().to_ascii_lowercase().starts_with("zh") => Self::ZhCn,
            _ => Self::En,
        }
    }

    /// Base URL of the hooks reference.
    pub fn docs_base(self) -> &'static str {
        match self {
            Self::En => "https://docs.claude.com/en/docs/claude-code/hooks",
            Self::ZhCn => "https://docs.claude.com/zh-CN/docs/claude-code/hooks",
        }
    }
}

/// Describe what an event is for, refined by phase where it matters.
pub fn description(event: &str, phase: &str, locale: Locale) -> &'static str {
    match HookEventKind::parse(event) {
        Some(kind) => kind_description(kind, phase, locale),
        None => match locale {
            Locale::En => "Unknown event.",
            Locale::ZhCn => "未知事件。",
        },
    }
}

fn kind_description(kind: HookEventKind, phase: &str, locale: Locale) -> &'static str {
    use HookEventKind as K;

    match (kind, locale) {
        (K::PreToolUse, Locale::En) => {
            "Runs before a tool executes; can block or adjust the call based on its parameters."
        }
        (K::PreToolUse, Locale::ZhCn) => "工具执行前触发，可基于参数阻止或调整调用。",
        (K::PostToolUse, Locale::En) => {
            "Runs after a tool completes successfully; commonly used to format, validate or record the result."
        }
        (K::PostToolUse, Locale::ZhCn) => "工具成功执行后触发，常用于格式化、校验或记录结果。",
        (K::UserPromptSubmit, Locale::En) => {
            "Runs before a user prompt is submitted; can validate or enrich the prompt."
        }
        (K::UserPromptSubmit, Locale::ZhCn) => "用户提交提示前触发，可进行提示校验或增强。",
        (K::Notification, Locale::En) => {
            "Runs when a notification is sent (permission needed or waiting for input)."
        }
        (K::Notification, Locale::ZhCn) => "当系统发送通知（需授权或等待输入）时触发。",
        (K::Stop, Locale::En) => {
            "Runs when the main agent finishes responding (not on user interrupt)."
        }
        (K::Stop, Locale::ZhCn) => "主代理完成响应时触发（用户中断不触发）。",
        (K::SubagentStop, Locale::En) => {
            "Runs when a subagent task finishes; records the end of the subtask."
        }
        (K::SubagentStop, Locale::ZhCn) => "子代理任务完成时触发，用于记录子任务结束。",
        (K::PreCompact, locale) => compact_description(CompactTrigger::from_phase(phase), locale),
        (K::SessionStart, locale) => {
            session_start_description(SessionSource::from_phase(phase), locale)
        }
        (K::SessionEnd, Locale::En) => {
            "Runs when a session ends; commonly used for wrap-up and cleanup."
        }
        (K::SessionEnd, Locale::ZhCn) => "会话结束时触发，常用于收尾与清理。",
    }
}

fn compact_description(trigger: CompactTrigger, locale: Locale) -> &'static str {
    match (trigger, locale) {
        (CompactTrigger::Manual, Locale::En) => {
            "Runs before a manual compaction; used to record or prepare for it."
        }
        (CompactTrigger::Manual, Locale::ZhCn) => "手动压缩前触发，用于记录或准备压缩。",
        (CompactTrigger::Auto, Locale::En) => {
            "Runs before an automatic compaction (context close to its limit); used to record or prepare for it."
        }
        (CompactTrigger::Auto, Locale::ZhCn) => {
            "自动压缩前触发（上下文接近上限），用于记录或准备压缩。"
        }
    }
}

fn session_start_description(source: SessionSource, locale: Locale) -> &'static str {
    match (source, locale) {
        (SessionSource::Startup, Locale::En) => {
            "Runs when a new session starts; used to load context or set up the environment."
        }
        (SessionSource::Startup, Locale::ZhCn) => "新会话启动时触发，用于加载上下文或设置环境。",
        (SessionSource::Resume, Locale::En) => {
            "Runs when a session is resumed; used to continue the previous context."
        }
        (SessionSource::Resume, Locale::ZhCn) => "恢复会话时触发，用于继续先前上下文。",
        (SessionSource::Clear, Locale::En) => {
            "Runs after the session is cleared; used to reset the environment and context."
        }
        (SessionSource::Clear, Locale::ZhCn) => "清空会话后触发，用于重置环境与上下文。",
        (SessionSource::Compact, Locale::En) => {
            "Session start caused by compaction; used to carry context forward."
        }
        (SessionSource::Compact, Locale::ZhCn) => "因压缩操作触发的会话启动，用于维持上下文。",
        (SessionSource::Other, Locale::En) => {
            "Session start event; initializes or restores context."
        }
        (SessionSource::Other, Locale::ZhCn) => "会话启动相关事件，初始化或恢复上下文。",
    }
}

/// Link to the event's section of the hooks reference.
///
/// Unknown events link to the top of the page.
pub fn doc_url(event: &str, locale: Locale) -> String {
    let base = locale.docs_base();
    match HookEventKind::parse(event) {
        Some(kind) => format!("{base}#{}", kind.anchor()),
        None => base.to_string(),
    }
}

/// One-line summary stored in the `message` field.
pub fn message(event: &str, phase: &str, locale: Locale) -> String {
    match (phase.is_empty(), locale) {
        (true, Locale::En) => format!("{event} event is executing"),
        (false, Locale::En) => format!("{event}({phase}) event is executing"),
        (true, Locale::ZhCn) => format!("{event}事件正在执行"),
        (false, Locale::ZhCn) => format!("{event}({phase})事件正在执行"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EN_BASE: &str = "https://docs.claude.com/en/docs/claude-code/hooks";
    const ZH_BASE: &str = "https://docs.claude.com/zh-CN/docs/claude-code/hooks";

    #[test]
    fn locale_from_lang() {
        assert_eq!(Locale::from_lang(None), Locale::En);
        assert_eq!(Locale::from_lang(Some("")), Locale::En);
        assert_eq!(Locale::from_lang(Some("en_US.UTF-8")), Locale::En);
        assert_eq!(Locale::from_lang(Some("zh")), Locale::ZhCn);
        assert_eq!(Locale::from_lang(Some("zh-CN")), Locale::ZhCn);
        assert_eq!(Locale::from_lang(Some("ZH_cn")), Locale::ZhCn);
    }

    #[test]
    fn known_events_have_specific_descriptions() {
        for locale in [Locale::En, Locale::ZhCn] {
            let generic = description("AnythingElse", "", locale);
            for kind in HookEventKind::ALL {
                assert_ne!(
                    description(kind.name(), "", locale),
                    generic,
                    "{kind:?} fell back to the generic description"
                );
            }
        }
    }

    #[test]
    fn unknown_event_description() {
        assert_eq!(description("AnythingElse", "", Locale::En), "Unknown event.");
        assert_eq!(description("AnythingElse", "", Locale::ZhCn), "未知事件。");
        assert_eq!(description("", "manual", Locale::En), "Unknown event.");
    }

    #[test]
    fn simple_events_ignore_phase() {
        assert_eq!(
            description("Stop", "whatever", Locale::En),
            description("Stop", "", Locale::En)
        );
        assert_eq!(
            description("PreToolUse", "Bash", Locale::En),
            description("PreToolUse", "", Locale::En)
        );
    }

    #[test]
    fn pre_compact_branches_on_manual() {
        let manual = description("PreCompact", "manual", Locale::En);
        let auto = description("PreCompact", "auto", Locale::En);
        assert!(manual.contains("manual"));
        assert!(auto.contains("automatic"));
        assert_ne!(manual, auto);
        assert_eq!(description("PreCompact", "", Locale::En), auto);
        assert_eq!(description("PreCompact", "other", Locale::En), auto);
        assert_eq!(
            description("PreCompact", "manual", Locale::ZhCn),
            "手动压缩前触发，用于记录或准备压缩。"
        );
    }

    #[test]
    fn session_start_branches_on_source() {
        for locale in [Locale::En, Locale::ZhCn] {
            let texts: HashSet<&str> = ["startup", "resume", "clear", "compact", "other"]
                .iter()
                .map(|phase| description("SessionStart", phase, locale))
                .collect();
            assert_eq!(texts.len(), 5);
        }
        assert_eq!(
            description("SessionStart", "", Locale::En),
            description("SessionStart", "unexpected", Locale::En)
        );
        assert_eq!(
            description("SessionStart", "resume", Locale::ZhCn),
            "恢复会话时触发，用于继续先前上下文。"
        );
    }

    #[test]
    fn doc_url_known_events() {
        for kind in HookEventKind::ALL {
            let anchor = kind.name().to_lowercase();
            assert_eq!(doc_url(kind.name(), Locale::En), format!("{EN_BASE}#{anchor}"));
            assert_eq!(doc_url(kind.name(), Locale::ZhCn), format!("{ZH_BASE}#{anchor}"));
        }
    }

    #[test]
    fn doc_url_unknown_event_is_base() {
        assert_eq!(doc_url("UnknownEvent", Locale::En), EN_BASE);
        assert_eq!(doc_url("", Locale::ZhCn), ZH_BASE);
    }

    #[test]
    fn message_with_and_without_phase() {
        assert_eq!(
            message("UnknownEvent", "", Locale::En),
            "UnknownEvent event is executing"
        );
        assert_eq!(
            message("SessionStart", "resume", Locale::En),
            "SessionStart(resume) event is executing"
        );
        assert_eq!(message("Stop", "", Locale::ZhCn), "Stop事件正在执行");
        assert_eq!(
            message("PreCompact", "auto", Locale::ZhCn),
            "PreCompact(auto)事件正在执行"
        );
    }
}
