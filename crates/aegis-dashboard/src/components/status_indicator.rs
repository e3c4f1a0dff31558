//! System status badge.
//!
//! The badge's look is resolved from `(mode, threat_level, animated)`:
//! a critical threat level always wins, otherwise the mode selects an entry
//! from a fixed presentation table. The resolved value is cached and only
//! recomputed when one of the three inputs changes.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use aegis_core::{SystemMode, ThreatLevel};

use crate::templates::html_escape;

/// Element id that activation responses are swapped into.
pub const STATUS_DETAIL_ID: &str = "status-detail";

/// When a presentation animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePolicy {
    Never,
    /// Only when the indicator is animated.
    WhenAnimated,
    /// Regardless of the `animated` flag.
    Always,
}

/// Visual treatment for a mode or threat level.
#[derive(Debug, PartialEq, Eq)]
pub struct Presentation {
    pub label: &'static str,
    /// Font Awesome icon name, without the `fa-` prefix.
    pub icon: &'static str,
    pub bg_class: &'static str,
    pub text_class: &'static str,
    pub border_class: &'static str,
    pub pulse: PulsePolicy,
}

impl Presentation {
    pub fn pulses(&self, animated: bool) -> bool {
        match self.pulse {
            PulsePolicy::Never => false,
            PulsePolicy::WhenAnimated => animated,
            PulsePolicy::Always => true,
        }
    }
}

pub static CONSCIOUS: Presentation = Presentation {
    label: "Conscious",
    icon: "brain",
    bg_class: "bg-blue-500/10",
    text_class: "text-blue-400",
    border_class: "border-blue-500/30",
    pulse: PulsePolicy::Never,
};

pub static PREDICTIVE: Presentation = Presentation {
    label: "Predictive",
    icon: "eye",
    bg_class: "bg-purple-500/10",
    text_class: "text-purple-400",
    border_class: "border-purple-500/30",
    pulse: PulsePolicy::WhenAnimated,
};

pub static SELF_HEALING: Presentation = Presentation {
    label: "Self-Healing",
    icon: "heart-pulse",
    bg_class: "bg-emerald-500/10",
    text_class: "text-emerald-400",
    border_class: "border-emerald-500/30",
    pulse: PulsePolicy::WhenAnimated,
};

pub static UNDER_ATTACK: Presentation = Presentation {
    label: "Under Attack",
    icon: "shield-halved",
    bg_class: "bg-orange-500/10",
    text_class: "text-orange-400",
    border_class: "border-orange-500/30",
    pulse: PulsePolicy::Always,
};

pub static UNKNOWN: Presentation = Presentation {
    label: "Unknown",
    icon: "circle-question",
    bg_class: "bg-gray-500/10",
    text_class: "text-gray-400",
    border_class: "border-gray-500/30",
    pulse: PulsePolicy::Never,
};

pub static CRITICAL: Presentation = Presentation {
    label: "CRITICAL",
    icon: "triangle-exclamation",
    bg_class: "bg-red-500/20",
    text_class: "text-red-400",
    border_class: "border-red-500/50",
    pulse: PulsePolicy::Always,
};

/// Presentation for a mode, ignoring threat level.
pub fn mode_presentation(mode: SystemMode) -> &'static Presentation {
    match mode {
        SystemMode::Conscious => &CONSCIOUS,
        SystemMode::Predictive => &PREDICTIVE,
        SystemMode::SelfHealing => &SELF_HEALING,
        SystemMode::UnderAttack => &UNDER_ATTACK,
        SystemMode::Unknown => &UNKNOWN,
    }
}

/// Presentation after applying the critical override.
pub fn resolve_presentation(mode: SystemMode, threat_level: ThreatLevel) -> &'static Presentation {
    if threat_level.is_critical() {
        &CRITICAL
    } else {
        mode_presentation(mode)
    }
}

/// A presentation together with its effective pulse state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub presentation: &'static Presentation,
    pub pulse: bool,
}

type Inputs = (SystemMode, ThreatLevel, bool);

type ActivateFn = Arc<dyn Fn() + Send + Sync>;

/// Clickable status badge.
pub struct StatusIndicator {
    mode: SystemMode,
    threat_level: ThreatLevel,
    animated: bool,
    on_activate: Option<ActivateFn>,
    activate_url: Option<String>,
    memo: Cell<Option<(Inputs, Resolved)>>,
    resolutions: Cell<u64>,
}

impl fmt::Debug for StatusIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusIndicator")
            .field("mode", &self.mode)
            .field("threat_level", &self.threat_level)
            .field("animated", &self.animated)
            .field("on_activate", &self.on_activate.is_some())
            .field("activate_url", &self.activate_url)
            .finish()
    }
}

impl StatusIndicator {
    /// Badge for `mode` with no threat override, animation on, and no
    /// activation handler.
    pub fn new(mode: SystemMode) -> Self {
        Self {
            mode,
            threat_level: ThreatLevel::None,
            animated: true,
            on_activate: None,
            activate_url: None,
            memo: Cell::new(None),
            resolutions: Cell::new(0),
        }
    }

    pub fn threat_level(mut self, threat_level: ThreatLevel) -> Self {
        self.threat_level = threat_level;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Handler run by [`StatusIndicator::activate`].
    pub fn on_activate<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_activate = Some(Arc::new(handler));
        self
    }

    /// Endpoint the browser posts to when the badge is clicked.
    pub fn activate_url(mut self, url: impl Into<String>) -> Self {
        self.activate_url = Some(url.into());
        self
    }

    pub fn set_mode(&mut self, mode: SystemMode) {
        self.mode = mode;
    }

    pub fn set_threat_level(&mut self, threat_level: ThreatLevel) {
        self.threat_level = threat_level;
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    pub fn mode(&self) -> SystemMode {
        self.mode
    }

    pub fn current_threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    /// Resolved presentation, reusing the cached value while the inputs are
    /// unchanged.
    pub fn presentation(&self) -> Resolved {
        let inputs = (self.mode, self.threat_level, self.animated);
        if let Some((cached_inputs, resolved)) = self.memo.get()
            && cached_inputs == inputs
        {
            return resolved;
        }

        let presentation = resolve_presentation(self.mode, self.threat_level);
        let resolved = Resolved {
            presentation,
            pulse: presentation.pulses(self.animated),
        };
        self.memo.set(Some((inputs, resolved)));
        self.resolutions.set(self.resolutions.get() + 1);
        resolved
    }

    /// How many times the presentation has been computed rather than served
    /// from the cache.
    pub fn resolutions(&self) -> u64 {
        self.resolutions.get()
    }

    /// Tooltip text: resolved label and threat level.
    pub fn tooltip(&self) -> String {
        format!(
            "{} - Threat: {}",
            self.presentation().presentation.label,
            self.threat_level
        )
    }

    /// Run the activation handler, if any. Returns whether one ran.
    pub fn activate(&self) -> bool {
        match &self.on_activate {
            Some(handler) => {
                tracing::debug!(mode = %self.mode, threat_level = %self.threat_level, "Status indicator activated");
                handler();
                true
            }
            None => false,
        }
    }

    /// Render the badge.
    pub fn render(&self) -> String {
        let Resolved { presentation: p, pulse } = self.presentation();
        let tooltip = html_escape(&self.tooltip());
        let pulse_class = if pulse { " animate-pulse" } else { "" };
        let hx_attrs = self
            .activate_url
            .as_deref()
            .map(|url| {
                format!(
                    r##" hx-post="{url}" hx-target="#{STATUS_DETAIL_ID}" hx-swap="innerHTML""##,
                    url = html_escape(url),
                )
            })
            .unwrap_or_default();

        format!(
            r##"<button type="button" class="inline-flex items-center gap-2 px-3 py-1.5 rounded-full border text-xs font-semibold tracking-wide {bg} {text} {border}{pulse_class}" title="{tooltip}" aria-label="{tooltip}" data-mode="{mode}" data-threat="{threat}" data-pulse="{pulse}"{hx_attrs}>
                <i class="fas fa-{icon}" aria-hidden="true"></i>
                <span>{label}</span>
            </button>"##,
            bg = p.bg_class,
            text = p.text_class,
            border = p.border_class,
            mode = self.mode,
            threat = self.threat_level,
            icon = p.icon,
            label = p.label.to_uppercase(),
        )
    }
}
