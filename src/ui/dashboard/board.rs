use chrono::{DateTime, Local};

use crate::core::config::ReportConfig;
use crate::core::telemetry::{assembler, HostProbe, PresentationSink, Report, Section};
use crate::error::Result;

const PLACEHOLDER: &str = "Not collected yet.\n";

/// One independently updatable display region
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub section: Section,
    pub label: &'static str,
    pub title: &'static str,
    pub text: String,
    pub failed: bool,
}

impl Slot {
    fn empty(section: Section) -> Self {
        Self {
            section,
            label: section.tab_label(),
            title: section.title(),
            text: PLACEHOLDER.to_string(),
            failed: false,
        }
    }
}

/// Labeled slots, one per section, that a refresh overwrites wholesale
#[derive(Debug, Clone)]
pub struct DashboardBoard {
    slots: Vec<Slot>,
    last_refreshed: Option<DateTime<Local>>,
    refresh_count: u64,
}

impl DashboardBoard {
    pub fn new(sections: &[Section]) -> Self {
        Self {
            slots: sections.iter().copied().map(Slot::empty).collect(),
            last_refreshed: None,
            refresh_count: 0,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, section: Section) -> Option<&Slot> {
        self.slots.iter().find(|s| s.section == section)
    }

    /// Replace one slot's text; `false` if the board has no such slot
    pub fn update_slot(&mut self, section: Section, text: impl Into<String>) -> bool {
        match self.slots.iter_mut().find(|s| s.section == section) {
            Some(slot) => {
                slot.text = text.into();
                slot.failed = false;
                true
            }
            None => false,
        }
    }

    /// Re-run every collector from scratch and overwrite every slot
    pub fn refresh_all(&mut self, host: &mut dyn HostProbe, config: &ReportConfig) -> Result<()> {
        assembler::run_into(host, config, self)
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

impl PresentationSink for DashboardBoard {
    fn present(&mut self, report: &Report) -> Result<()> {
        for slot in &mut self.slots {
            match report.block(slot.section) {
                Some(block) => {
                    slot.text = block.text.clone();
                    slot.failed = block.is_failed();
                }
                None => *slot = Slot::empty(slot.section),
            }
        }

        self.last_refreshed = Some(report.collected_at);
        self.refresh_count += 1;
        Ok(())
    }
}
