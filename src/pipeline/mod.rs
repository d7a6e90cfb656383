pub mod derive;
pub mod frames;
pub mod mode;
pub mod selector;
pub mod sequencer;

pub use derive::{DerivedRow, PRESENT_OFFSET_YEARS};
pub use frames::{Frame, FrameBuilder, Frames, PRE_RENDERED_POINTS};
pub use mode::{Exclusions, Mode, ModeRow, ModeView};
pub use selector::{LabelCount, Selection, DEFAULT_TOP_N};

use crate::error::TrackerResult;
use crate::records::{Coordinates, RecordTable};
use std::collections::HashMap;
use tracing::{debug, info};

/// What the user asked to see.
#[derive(Debug, Clone)]
pub struct TrackRequest {
    pub mode: Mode,
    pub selection: Selection,
    /// Defaults to the first selected label.
    pub target: Option<String>,
}

impl TrackRequest {
    pub fn new(mode: Mode, selection: Selection) -> Self {
        Self {
            mode,
            selection,
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Points of the whole selection, oldest first, plus where to center the map.
#[derive(Debug, Clone)]
pub struct StaticLayer<'a> {
    pub points: Vec<DerivedRow<'a>>,
    pub center: Coordinates,
}

impl<'a> StaticLayer<'a> {
    fn new(points: Vec<DerivedRow<'a>>) -> Self {
        let n = points.len().max(1) as f64;
        let (lat, long) = points.iter().fold((0.0, 0.0), |(lat, long), p| {
            let c = p.coordinates();
            (lat + c.lat, long + c.long)
        });
        Self {
            points,
            center: Coordinates {
                lat: lat / n,
                long: long / n,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackOutput<'a> {
    pub mode: Mode,
    pub exclusions: Exclusions,
    pub ranking: Vec<LabelCount>,
    pub static_layer: StaticLayer<'a>,
    pub animation: FrameBuilder<'a>,
}

/// One user session over a loaded table. Every request recomputes from the table; only
/// the per-mode filter output is cached, since it depends on nothing but the table.
#[derive(Debug)]
pub struct Session<'a> {
    table: &'a RecordTable,
    top_n: usize,
    views: HashMap<Mode, ModeView<'a>>,
}

impl<'a> Session<'a> {
    pub fn new(table: &'a RecordTable) -> Self {
        Self {
            table,
            top_n: DEFAULT_TOP_N,
            views: HashMap::new(),
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn table(&self) -> &'a RecordTable {
        self.table
    }

    pub fn view(&mut self, mode: Mode) -> &ModeView<'a> {
        let table = self.table;
        self.views
            .entry(mode)
            .or_insert_with(|| ModeView::filter(table, mode))
    }

    pub fn ranking(&mut self, mode: Mode) -> Vec<LabelCount> {
        let n = self.top_n;
        selector::top_n(self.view(mode).labels(), n)
    }

    pub fn track(&mut self, request: &TrackRequest) -> TrackerResult<TrackOutput<'a>> {
        let mode = request.mode;
        let target = request
            .target
            .as_deref()
            .unwrap_or_else(|| request.selection.first());
        let target = request.selection.require_target(target)?;

        let top_n = self.top_n;
        let view = self.view(mode);
        let ranking = selector::top_n(view.labels(), top_n);
        let exclusions = view.exclusions;
        if let Some(summary) = exclusions.summary() {
            info!(mode = mode.name(), "{}", summary);
        }

        let selected = selector::select(view, &request.selection)?;
        let sequenced = sequencer::sequence(derive::derive(&selected));
        let animation = FrameBuilder::isolate(mode, target, &sequenced)?;
        debug!(
            haplogroup = target,
            selected = sequenced.len(),
            frames = animation.frame_count(),
            "animation prepared"
        );

        Ok(TrackOutput {
            mode,
            exclusions,
            ranking,
            static_layer: StaticLayer::new(sequenced),
            animation,
        })
    }
}
