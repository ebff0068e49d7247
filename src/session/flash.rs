//! Flash messages
//!
//! Transient messages shown after an action. Each message stays visible for
//! a fixed time, then fades out and is dropped.

use std::time::{Duration, Instant};

use crate::config::FlashSettings;

/// Type of flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Success,
    Warning,
    Error,
}

impl FlashKind {
    /// Get the icon/prefix for this kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Where a message is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Fading,
    Expired,
}

/// A flash message
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub message: String,
    pub kind: FlashKind,
    pub created_at: Instant,
}

impl FlashMessage {
    pub fn new(message: impl Into<String>, kind: FlashKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// Phase of the message at `now`
    pub fn phase_at(&self, now: Instant, timing: &FlashSettings) -> FlashPhase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < timing.display() {
            FlashPhase::Visible
        } else if elapsed < timing.display() + timing.fade() {
            FlashPhase::Fading
        } else {
            FlashPhase::Expired
        }
    }

    /// Opacity at `now`, from 1.0 while visible down to 0.0 when expired
    pub fn opacity_at(&self, now: Instant, timing: &FlashSettings) -> f64 {
        let elapsed = now.saturating_duration_since(self.created_at);
        match self.phase_at(now, timing) {
            FlashPhase::Visible => 1.0,
            FlashPhase::Expired => 0.0,
            FlashPhase::Fading => {
                let into_fade = elapsed - timing.display();
                let fade = timing.fade().max(Duration::from_millis(1));
                (1.0 - into_fade.as_secs_f64() / fade.as_secs_f64()).clamp(0.0, 1.0)
            }
        }
    }
}

/// Queue of active flash messages
#[derive(Debug, Default)]
pub struct FlashQueue {
    messages: Vec<FlashMessage>,
    timing: FlashSettings,
}

impl FlashQueue {
    pub fn new(timing: FlashSettings) -> Self {
        Self {
            messages: Vec::new(),
            timing,
        }
    }

    pub fn timing(&self) -> &FlashSettings {
        &self.timing
    }

    pub fn push(&mut self, message: impl Into<String>, kind: FlashKind) {
        self.messages.push(FlashMessage::new(message, kind));
    }

    pub fn push_message(&mut self, message: FlashMessage) {
        self.messages.push(message);
    }

    /// Drop messages that have fully faded out by `now`
    pub fn tick(&mut self, now: Instant) {
        let timing = self.timing;
        self.messages
            .retain(|m| m.phase_at(now, &timing) != FlashPhase::Expired);
    }

    /// Oldest message still on screen
    pub fn current(&self) -> Option<&FlashMessage> {
        self.messages.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlashMessage> {
        self.messages.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
