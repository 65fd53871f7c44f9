//! View selection
//!
//! A page request carries at most a handful of trigger flags (one per
//! dashboard button). They collapse into exactly one [`View`], which is then
//! passed explicitly to the renderer. Nothing persists between requests.

use crate::config::DashboardConfig;
use crate::store::VideoTrendRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The section shown below the header tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Default,
    ViralOnly,
    EarlyTrending,
    DetailedReview,
}

/// How a section lays out its cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Thumbnail cards with badge and watch link
    Grid,
    /// Text-only cards with engagement
    Detailed,
}

/// Heading, layout and card cap for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub layout: Layout,
    pub columns: usize,
    pub cap: usize,
}

impl View {
    /// Parse a `view=` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "top" => Some(View::Default),
            "viral" => Some(View::ViralOnly),
            "early" => Some(View::EarlyTrending),
            "detailed" | "all" => Some(View::DetailedReview),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Default => "default",
            View::ViralOnly => "viral",
            View::EarlyTrending => "early",
            View::DetailedReview => "detailed",
        }
    }

    /// Query key of the button that selects this view
    pub fn trigger_key(self) -> Option<&'static str> {
        match self {
            View::Default => None,
            View::ViralOnly => Some("viral"),
            View::EarlyTrending => Some("early"),
            View::DetailedReview => Some("all"),
        }
    }

    pub fn section(self, config: &DashboardConfig) -> Section {
        match self {
            View::Default => Section {
                heading: "Top Performing Videos",
                layout: Layout::Grid,
                columns: config.grid_columns,
                cap: config.default_cap,
            },
            View::ViralOnly => Section {
                heading: "Currently Viral",
                layout: Layout::Grid,
                columns: config.grid_columns,
                cap: config.viral_cap,
            },
            View::EarlyTrending => Section {
                heading: "Early Trending (Under 24 Hours)",
                layout: Layout::Grid,
                columns: config.grid_columns,
                cap: config.early_cap,
            },
            View::DetailedReview => Section {
                heading: "Detailed Video Analysis",
                layout: Layout::Detailed,
                columns: config.detailed_columns,
                cap: config.detailed_cap,
            },
        }
    }

    /// Rows belonging to this view, in ranked order (not yet capped)
    pub fn select<'a>(
        self,
        records: &'a [VideoTrendRecord],
        config: &DashboardConfig,
    ) -> Vec<&'a VideoTrendRecord> {
        match self {
            View::ViralOnly => records.iter().filter(|r| r.is_viral).collect(),
            View::EarlyTrending => records
                .iter()
                .filter(|r| r.is_early(config.early_max_age_hours))
                .collect(),
            View::Default | View::DetailedReview => records.iter().collect(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::from_name(s).ok_or_else(|| {
            format!("unknown view '{}' (expected default, viral, early or detailed)", s)
        })
    }
}

/// Button flags and canonical view name from a page request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewTriggers {
    #[serde(default)]
    pub viral: Option<String>,
    #[serde(default)]
    pub early: Option<String>,
    #[serde(default)]
    pub all: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
}

impl ViewTriggers {
    /// Collapse the triggers into one view
    ///
    /// Button flags outrank `view=`; among flags the order is
    /// viral, early, detailed.
    pub fn resolve(&self) -> View {
        if pressed(&self.viral) {
            View::ViralOnly
        } else if pressed(&self.early) {
            View::EarlyTrending
        } else if pressed(&self.all) {
            View::DetailedReview
        } else {
            self.view
                .as_deref()
                .and_then(View::from_name)
                .unwrap_or_default()
        }
    }
}

fn pressed(flag: &Option<String>) -> bool {
    match flag.as_deref() {
        None => false,
        Some(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false"),
    }
}
