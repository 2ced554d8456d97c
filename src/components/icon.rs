use leptos::prelude::*;

/// Glyph set shared by the agent, skill and tool lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bot,
    Code,
    Eye,
    Search,
    FileText,
    Globe,
    Terminal,
    FileCode,
    Braces,
    Calculator,
    CloudSun,
    Database,
    Wrench,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Bot => "🤖",
            Icon::Code => "⟨⟩",
            Icon::Eye => "👁",
            Icon::Search => "🔍",
            Icon::FileText => "📝",
            Icon::Globe => "🌐",
            Icon::Terminal => "⌨",
            Icon::FileCode => "📄",
            Icon::Braces => "{}",
            Icon::Calculator => "🧮",
            Icon::CloudSun => "⛅",
            Icon::Database => "🗄",
            Icon::Wrench => "🔧",
        }
    }
}

#[component]
pub fn IconBadge(icon: Icon, #[prop(optional)] small: bool) -> impl IntoView {
    view! {
        <span class="icon-badge" class:small=small aria-hidden="true">{icon.glyph()}</span>
    }
}
