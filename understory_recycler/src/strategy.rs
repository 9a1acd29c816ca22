// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout strategies: how a list computes its window and fills the space before it.

use core::num::NonZeroUsize;

use understory_scroll_window::{LayoutMetrics, WindowCalculator, WindowInput, WindowPlan};

use crate::spacer::{GridSpacer, LinearSpacer};
use crate::{
    ContentOrder, Diagnostic, DiagnosticSink, Filler, InstanceId, LayoutDescriptor, PoolStats,
    RecyclerConfig, SetupError,
};

/// How the active window moves instances when the first bound index changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftMode {
    /// Move one instance per index of travel, at most one full rotation.
    PerItem,
    /// Move one instance, then rebind the whole window if the jump was longer than one.
    SingleStep,
}

/// The layout-specific half of a [`RecyclingList`](crate::RecyclingList).
///
/// A strategy resolves layout metrics at setup, picks the window computation,
/// and owns the spacer that stands in for content scrolled past.
pub trait LayoutStrategy {
    /// Filler type used by the spacer.
    type Filler: Filler;

    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Window computation for this layout.
    fn calculator(&self) -> WindowCalculator;

    /// How instances move on a shift.
    fn shift_mode(&self) -> ShiftMode;

    /// Builds metrics from the configuration and the host's layout descriptor.
    fn resolve_metrics(
        &self,
        config: &RecyclerConfig,
        descriptor: Option<&LayoutDescriptor>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<LayoutMetrics, SetupError>;

    /// Prepares the spacer once metrics are known.
    fn attach(
        &mut self,
        config: &RecyclerConfig,
        metrics: &LayoutMetrics,
        order: &mut ContentOrder,
    );

    /// Resizes the spacer for `plan`. Returns `true` if anything changed.
    fn sync_spacer(
        &mut self,
        plan: &WindowPlan,
        metrics: &LayoutMetrics,
        order: &mut ContentOrder,
    ) -> bool;

    /// Releases every filler and removes it from `order`.
    fn reset(&mut self, order: &mut ContentOrder);

    /// Drops every filler instance.
    fn dispose(&mut self);

    /// The filler behind `id`.
    fn filler(&self, id: InstanceId) -> Option<&Self::Filler>;

    /// Mutable access to the filler behind `id`.
    fn filler_mut(&mut self, id: InstanceId) -> Option<&mut Self::Filler>;

    /// Counters of the filler pool.
    fn filler_stats(&self) -> PoolStats;

    /// Computes the window for `input`.
    fn compute_window(&self, metrics: &LayoutMetrics, input: &WindowInput) -> WindowPlan {
        self.calculator().compute(metrics, input)
    }
}

/// Spacing and padding shared by both layouts.
fn base_metrics(
    layout: &'static str,
    config: &RecyclerConfig,
    descriptor: Option<&LayoutDescriptor>,
    sink: &mut dyn DiagnosticSink,
) -> Result<LayoutMetrics, SetupError> {
    let mut metrics = LayoutMetrics::new(config.axis, config.base_extent);
    match descriptor {
        Some(descriptor) => {
            metrics = metrics
                .with_spacing(config.axis.main_of(descriptor.spacing))
                .with_padding(descriptor.padding);
        }
        None => sink.report(&Diagnostic::MissingLayoutDescriptor { layout }),
    }
    if !metrics.is_valid() {
        return Err(SetupError::InvalidElementExtent {
            base_extent: metrics.base_extent,
            spacing: metrics.spacing,
        });
    }
    Ok(metrics)
}

/// A single-column (or single-row) list with one variable-size leading filler.
#[derive(Debug)]
pub struct LinearStrategy<F> {
    spacer: LinearSpacer<F>,
}

impl<F: Filler> LinearStrategy<F> {
    /// Creates a strategy whose leading filler is built by `factory`.
    pub fn new(factory: impl FnMut() -> F + 'static) -> Self {
        Self {
            spacer: LinearSpacer::new(factory),
        }
    }

    /// The leading spacer.
    #[must_use]
    pub fn spacer(&self) -> &LinearSpacer<F> {
        &self.spacer
    }
}

impl<F: Filler> LayoutStrategy for LinearStrategy<F> {
    type Filler = F;

    const NAME: &'static str = "linear";

    fn calculator(&self) -> WindowCalculator {
        WindowCalculator::Linear
    }

    fn shift_mode(&self) -> ShiftMode {
        ShiftMode::SingleStep
    }

    fn resolve_metrics(
        &self,
        config: &RecyclerConfig,
        descriptor: Option<&LayoutDescriptor>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<LayoutMetrics, SetupError> {
        base_metrics(Self::NAME, config, descriptor, sink)
    }

    fn attach(
        &mut self,
        config: &RecyclerConfig,
        _metrics: &LayoutMetrics,
        order: &mut ContentOrder,
    ) {
        self.spacer.prewarm(config.prewarm_fillers);
        self.spacer.attach(order);
    }

    fn sync_spacer(
        &mut self,
        plan: &WindowPlan,
        metrics: &LayoutMetrics,
        _order: &mut ContentOrder,
    ) -> bool {
        self.spacer.sync(plan.leading_extent, metrics.spacing, metrics.axis)
    }

    fn reset(&mut self, order: &mut ContentOrder) {
        self.spacer.detach(order);
    }

    fn dispose(&mut self) {
        self.spacer.dispose();
    }

    fn filler(&self, id: InstanceId) -> Option<&F> {
        self.spacer.get(id)
    }

    fn filler_mut(&mut self, id: InstanceId) -> Option<&mut F> {
        self.spacer.get_mut(id)
    }

    fn filler_stats(&self) -> PoolStats {
        self.spacer.pool_stats()
    }
}

/// A grid with a fixed number of cells per line, padded by one filler cell per
/// culled record.
#[derive(Debug)]
pub struct GridStrategy<F> {
    spacer: GridSpacer<F>,
}

impl<F: Filler> GridStrategy<F> {
    /// Creates a strategy whose filler cells are built by `factory`.
    pub fn new(factory: impl FnMut() -> F + 'static) -> Self {
        Self {
            spacer: GridSpacer::new(factory),
        }
    }

    /// The leading filler cells.
    #[must_use]
    pub fn spacer(&self) -> &GridSpacer<F> {
        &self.spacer
    }
}

impl<F: Filler> LayoutStrategy for GridStrategy<F> {
    type Filler = F;

    const NAME: &'static str = "grid";

    fn calculator(&self) -> WindowCalculator {
        WindowCalculator::Grid
    }

    fn shift_mode(&self) -> ShiftMode {
        ShiftMode::PerItem
    }

    fn resolve_metrics(
        &self,
        config: &RecyclerConfig,
        descriptor: Option<&LayoutDescriptor>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<LayoutMetrics, SetupError> {
        let columns = match descriptor.map(|d| d.columns) {
            Some(Some(0)) => return Err(SetupError::ZeroColumns),
            Some(Some(columns)) => NonZeroUsize::new(columns).unwrap_or(NonZeroUsize::MIN),
            Some(None) => {
                sink.report(&Diagnostic::MissingColumnCount);
                NonZeroUsize::MIN
            }
            // The missing descriptor itself is reported below.
            None => NonZeroUsize::MIN,
        };
        Ok(base_metrics(Self::NAME, config, descriptor, sink)?.with_constraint_count(columns))
    }

    fn attach(
        &mut self,
        config: &RecyclerConfig,
        metrics: &LayoutMetrics,
        _order: &mut ContentOrder,
    ) {
        self.spacer.set_cell_extent(metrics.axis, metrics.base_extent);
        self.spacer.prewarm(config.prewarm_fillers);
    }

    fn sync_spacer(
        &mut self,
        plan: &WindowPlan,
        _metrics: &LayoutMetrics,
        order: &mut ContentOrder,
    ) -> bool {
        // One cell per culled record. Whole lines while snapped; at the very
        // end this keeps the trailing partial line in its columns.
        self.spacer.sync(plan.first_index, order)
    }

    fn reset(&mut self, order: &mut ContentOrder) {
        self.spacer.clear(order);
    }

    fn dispose(&mut self) {
        self.spacer.dispose();
    }

    fn filler(&self, id: InstanceId) -> Option<&F> {
        self.spacer.get(id)
    }

    fn filler_mut(&mut self, id: InstanceId) -> Option<&mut F> {
        self.spacer.get_mut(id)
    }

    fn filler_stats(&self) -> PoolStats {
        self.spacer.pool_stats()
    }
}
