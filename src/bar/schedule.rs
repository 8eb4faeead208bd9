// src/bar/schedule.rs

use std::time::Instant;

use tracing::{trace, warn};

use crate::widget::CommandWidget;

/// When a scheduled widget should next be ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextDue {
    /// Never ticked yet.
    Now,
    At(Instant),
    /// The interval pushes the next run past what `Instant` can represent.
    Never,
}

/// A widget plus the earliest instant it should be ticked again.
#[derive(Debug)]
pub struct ScheduledWidget {
    widget: CommandWidget,
    next_due: NextDue,
}

impl ScheduledWidget {
    pub fn new(widget: CommandWidget) -> Self {
        Self {
            widget,
            next_due: NextDue::Now,
        }
    }

    pub fn widget(&self) -> &CommandWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut CommandWidget {
        &mut self.widget
    }

    /// A widget that was never ticked is due immediately.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.next_due {
            NextDue::Now => true,
            NextDue::At(due) => now >= due,
            NextDue::Never => false,
        }
    }

    /// Tick the widget if it is due and re-arm it one interval after `now`.
    /// Returns whether a tick happened.
    pub async fn tick_if_due(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }

        trace!(widget = %self.widget.name(), "widget due; ticking");
        self.widget.tick().await;

        let interval = self.widget.config().interval;
        self.next_due = match now.checked_add(interval) {
            Some(due) => NextDue::At(due),
            None => {
                warn!(
                    widget = %self.widget.name(),
                    ?interval,
                    "interval overflows the clock; widget will not be ticked again"
                );
                NextDue::Never
            }
        };
        true
    }
}
