// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling controller tying pool, window, spacer, and child order together.

use alloc::boxed::Box;

use kurbo::Size;
use understory_scroll_window::{LayoutMetrics, WindowInput, WindowPlan, metrics};

use crate::{
    ActiveWindow, Changes, ContentOrder, DataSource, Diagnostic, DiagnosticSink, InstanceId,
    ItemPool, LayoutDescriptor, LayoutStrategy, NullSink, PoolStats, Poolable, RecyclerConfig,
    SetupError, VisualItem,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Ready,
    TornDown,
}

/// A recycled list or grid over a host-owned data set.
///
/// The list keeps a small window of leased items bound to consecutive data
/// indices, plus a spacer standing in for everything scrolled past. Each
/// [`update`](Self::update) recomputes the window from the scroll position
/// and moves as few items as it can:
///
/// - a changed window length releases and re-leases every item;
/// - a moved first index recycles items from one end to the other;
/// - an unchanged position does nothing at all.
///
/// After each update the host mirrors [`children`](Self::children) into its
/// scene and sizes its scroll container to [`content_extent`](Self::content_extent).
///
/// Dropping the list tears it down.
///
/// ```rust
/// use understory_recycler::{
///     Axis, Changes, Filler, LayoutDescriptor, LinearStrategy, Poolable, RecyclerConfig,
///     RecyclingList, VisualItem,
/// };
///
/// #[derive(Default)]
/// struct Row(Option<String>);
/// impl Poolable for Row {
///     fn set_active(&mut self, _active: bool) {}
/// }
/// impl VisualItem<String> for Row {
///     fn bind(&mut self, _index: usize, record: &String) {
///         self.0 = Some(record.clone());
///     }
/// }
///
/// #[derive(Default)]
/// struct Gap(f64);
/// impl Poolable for Gap {
///     fn set_active(&mut self, _active: bool) {}
/// }
/// impl Filler for Gap {
///     fn set_ignore_layout(&mut self, _ignore: bool) {}
///     fn set_main_extent(&mut self, _axis: Axis, extent: f64) {
///         self.0 = extent;
///     }
/// }
///
/// let rows: Vec<String> = (0..1000).map(|i| format!("row {i}")).collect();
/// let config = RecyclerConfig::new(Axis::Vertical, 20.0).with_prewarm_items(8);
/// let mut list = RecyclingList::new(config, LinearStrategy::new(Gap::default), Row::default);
/// list.setup(Some(&LayoutDescriptor::new())).unwrap();
///
/// let changes = list.update(&rows, 100.0, 0.5);
/// assert!(changes.contains(Changes::REPOPULATED));
/// assert_eq!(list.first_index(), Some(497));
/// assert_eq!(list.active_items().len(), 6);
///
/// // Same position: nothing to do.
/// assert!(list.update(&rows, 100.0, 0.5).is_empty());
/// ```
pub struct RecyclingList<I: Poolable, S: LayoutStrategy> {
    config: RecyclerConfig,
    strategy: S,
    pool: ItemPool<I>,
    window: ActiveWindow,
    order: ContentOrder,
    metrics: Option<LayoutMetrics>,
    last_plan: Option<WindowPlan>,
    rebind_pending: bool,
    sink: Box<dyn DiagnosticSink>,
    lifecycle: Lifecycle,
}

impl<I: Poolable, S: LayoutStrategy> core::fmt::Debug for RecyclingList<I, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclingList")
            .field("layout", &S::NAME)
            .field("config", &self.config)
            .field("lifecycle", &self.lifecycle)
            .field("metrics", &self.metrics)
            .field("last_plan", &self.last_plan)
            .field("window", &self.window)
            .field("children", &self.order.len())
            .field("rebind_pending", &self.rebind_pending)
            .finish_non_exhaustive()
    }
}

impl<I: Poolable, S: LayoutStrategy> RecyclingList<I, S> {
    /// Creates a list that builds its items with `item_factory`.
    ///
    /// Nothing is created until [`setup`](Self::setup). Diagnostics are
    /// discarded unless a sink is installed with
    /// [`with_diagnostics`](Self::with_diagnostics).
    pub fn new(
        config: RecyclerConfig,
        strategy: S,
        item_factory: impl FnMut() -> I + 'static,
    ) -> Self {
        Self {
            config,
            strategy,
            pool: ItemPool::new(item_factory),
            window: ActiveWindow::new(),
            order: ContentOrder::new(),
            metrics: None,
            last_plan: None,
            rebind_pending: false,
            sink: Box::new(NullSink),
            lifecycle: Lifecycle::Created,
        }
    }

    /// Routes diagnostics to `sink`.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Resolves layout metrics, prewarms the pools, and attaches the spacer.
    ///
    /// Runs once: later calls, including after [`teardown`](Self::teardown),
    /// return `Ok(())` without doing anything. A missing descriptor is reported
    /// to the diagnostic sink and setup continues with defaults. On error the
    /// list stays un-set-up and the call may be retried.
    pub fn setup(&mut self, descriptor: Option<&LayoutDescriptor>) -> Result<(), SetupError> {
        if self.lifecycle != Lifecycle::Created {
            return Ok(());
        }
        let metrics = match self
            .strategy
            .resolve_metrics(&self.config, descriptor, &mut *self.sink)
        {
            Ok(metrics) => metrics,
            Err(err) => {
                rwarn!(layout = S::NAME, %err, "setup rejected");
                return Err(err);
            }
        };
        self.pool.set_pooled_extent(metrics.axis, metrics.base_extent);
        self.pool.prewarm(self.config.prewarm_items);
        self.strategy.attach(&self.config, &metrics, &mut self.order);
        rdebug!(
            layout = S::NAME,
            element = metrics.element_extent(),
            columns = metrics.constraint_count.get(),
            "setup complete"
        );
        self.metrics = Some(metrics);
        self.lifecycle = Lifecycle::Ready;
        Ok(())
    }

    /// Runs one update pass for `data` at `normalized_scroll`.
    ///
    /// `viewport_extent` is the viewport's length along the scroll axis.
    /// Returns what changed; an empty set means nothing was touched. Before
    /// setup (or after teardown) this reports
    /// [`Diagnostic::UpdateBeforeSetup`] and returns an empty set.
    pub fn update<D>(&mut self, data: &D, viewport_extent: f64, normalized_scroll: f64) -> Changes
    where
        D: DataSource + ?Sized,
        I: VisualItem<D::Record>,
    {
        let (Lifecycle::Ready, Some(metrics)) = (self.lifecycle, self.metrics) else {
            self.sink.report(&Diagnostic::UpdateBeforeSetup);
            return Changes::empty();
        };
        let input = WindowInput::new(data.len(), viewport_extent, normalized_scroll);
        let plan = self.strategy.compute_window(&metrics, &input);

        let mut changes = Changes::empty();
        if self.strategy.sync_spacer(&plan, &metrics, &mut self.order) {
            changes |= Changes::SPACER_RESIZED;
        }
        changes |= self.window.sync(
            &plan,
            self.strategy.shift_mode(),
            self.rebind_pending,
            &mut self.pool,
            &mut self.order,
            data,
            &mut *self.sink,
        );
        if !changes.is_empty() {
            rtrace!(?changes, first = plan.first_index, len = plan.required_count, "updated");
        }
        self.rebind_pending = false;
        self.last_plan = Some(plan);
        changes
    }

    /// Like [`update`](Self::update), taking the whole viewport size.
    pub fn update_with_viewport<D>(
        &mut self,
        data: &D,
        viewport: Size,
        normalized_scroll: f64,
    ) -> Changes
    where
        D: DataSource + ?Sized,
        I: VisualItem<D::Record>,
    {
        let extent = metrics::viewport_extent(self.config.axis, viewport);
        self.update(data, extent, normalized_scroll)
    }

    /// Rebinds every active item on the next update, without pool traffic.
    ///
    /// Use this when records changed in place but the count did not.
    pub fn notify_data_changed(&mut self) {
        self.rebind_pending = true;
    }

    /// Releases every active item and filler. The next update repopulates.
    ///
    /// The list stays set up; pooled instances are kept for reuse.
    pub fn reset(&mut self) {
        self.window.release_all(&mut self.pool, &mut self.order);
        self.strategy.reset(&mut self.order);
        self.last_plan = None;
        self.rebind_pending = false;
        if self.lifecycle == Lifecycle::Ready
            && let Some(metrics) = self.metrics
        {
            self.strategy.attach(&self.config, &metrics, &mut self.order);
        }
        rdebug!(layout = S::NAME, "reset");
    }

    /// Releases and drops every instance. Later updates are ignored.
    ///
    /// Runs on drop; calling it again does nothing.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.window.release_all(&mut self.pool, &mut self.order);
        self.strategy.reset(&mut self.order);
        self.strategy.dispose();
        self.pool.dispose();
        self.order.clear();
        self.last_plan = None;
        self.lifecycle = Lifecycle::TornDown;
        rdebug!(layout = S::NAME, "torn down");
    }
}

impl<I: Poolable, S: LayoutStrategy> RecyclingList<I, S> {
    /// Scroll position in `[0, 1]` for a pixel `offset` into content with
    /// `item_count` records, seen through a viewport of `viewport_extent`.
    ///
    /// Returns `0.0` before setup.
    #[must_use]
    pub fn normalized_for_offset(
        &self,
        item_count: usize,
        offset: f64,
        viewport_extent: f64,
    ) -> f64 {
        let Some(extent) = self.content_extent_for(item_count) else {
            return 0.0;
        };
        metrics::normalized_position(offset, extent, viewport_extent)
    }

    /// Content extent along the scroll axis for `item_count` records, padding
    /// included. `None` before setup.
    #[must_use]
    pub fn content_extent_for(&self, item_count: usize) -> Option<f64> {
        let layout = self.metrics.as_ref()?;
        let lines = item_count.div_ceil(layout.constraint_count.get());
        Some(metrics::content_extent(layout, lines))
    }

    /// Content extent computed by the last update.
    #[must_use]
    pub fn content_extent(&self) -> Option<f64> {
        self.last_plan.map(|plan| plan.content_extent)
    }

    /// Returns `true` between a successful setup and teardown.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Metrics resolved at setup.
    #[must_use]
    pub fn metrics(&self) -> Option<&LayoutMetrics> {
        self.metrics.as_ref()
    }

    /// Configuration the list was built with.
    #[must_use]
    pub fn config(&self) -> &RecyclerConfig {
        &self.config
    }

    /// Plan computed by the last update.
    #[must_use]
    pub fn last_plan(&self) -> Option<&WindowPlan> {
        self.last_plan.as_ref()
    }

    /// First bound data index as of the last update.
    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        self.last_plan.map(|plan| plan.first_index)
    }

    /// Active items in display order.
    #[must_use]
    pub fn active_items(&self) -> &[InstanceId] {
        self.window.items()
    }

    /// The active window.
    #[must_use]
    pub fn window(&self) -> &ActiveWindow {
        &self.window
    }

    /// The active item behind `id`.
    #[must_use]
    pub fn item(&self, id: InstanceId) -> Option<&I> {
        self.pool.get(id)
    }

    /// Mutable access to the active item behind `id`.
    pub fn item_mut(&mut self, id: InstanceId) -> Option<&mut I> {
        self.pool.get_mut(id)
    }

    /// The active filler behind `id`.
    #[must_use]
    pub fn filler(&self, id: InstanceId) -> Option<&S::Filler> {
        self.strategy.filler(id)
    }

    /// Children of the content container, in sibling order.
    #[must_use]
    pub fn children(&self) -> &ContentOrder {
        &self.order
    }

    /// Counters of the item pool.
    #[must_use]
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Counters of the filler pool.
    #[must_use]
    pub fn filler_stats(&self) -> PoolStats {
        self.strategy.filler_stats()
    }

    /// The layout strategy.
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<I: Poolable, S: LayoutStrategy> Drop for RecyclingList<I, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use core::time::Duration;
    use std::time::Instant;

    use kurbo::{Insets, Size, Vec2};
    use understory_scroll_window::Axis;

    use super::RecyclingList;
    use crate::{
        Changes, Child, Diagnostic, Filler, GridStrategy, LayoutDescriptor, LinearStrategy,
        Poolable, RecyclerConfig, SetupError, VisualItem,
    };

    #[derive(Debug)]
    struct Row {
        shown: bool,
        live: Rc<Cell<usize>>,
        index: Option<usize>,
        binds: usize,
    }

    impl Poolable for Row {
        fn set_active(&mut self, active: bool) {
            match (self.shown, active) {
                (false, true) => self.live.set(self.live.get() + 1),
                (true, false) => self.live.set(self.live.get() - 1),
                _ => {}
            }
            self.shown = active;
        }
    }

    impl VisualItem<u32> for Row {
        fn bind(&mut self, index: usize, record: &u32) {
            assert_eq!(usize::try_from(*record).unwrap(), index, "bound to the wrong record");
            self.index = Some(index);
            self.binds += 1;
        }
    }

    #[derive(Debug, Default)]
    struct Pad {
        ignore: bool,
        extent: f64,
    }

    impl Poolable for Pad {
        fn set_active(&mut self, _active: bool) {}
    }

    impl Filler for Pad {
        fn set_ignore_layout(&mut self, ignore: bool) {
            self.ignore = ignore;
        }

        fn set_main_extent(&mut self, _axis: Axis, extent: f64) {
            self.extent = extent;
        }
    }

    type Diagnostics = Rc<RefCell<Vec<Diagnostic>>>;

    fn row_factory(live: &Rc<Cell<usize>>) -> impl FnMut() -> Row + 'static {
        let live = live.clone();
        move || Row {
            shown: false,
            live: live.clone(),
            index: None,
            binds: 0,
        }
    }

    fn list(base: f64) -> (RecyclingList<Row, LinearStrategy<Pad>>, Rc<Cell<usize>>) {
        let live = Rc::new(Cell::new(0));
        let list = RecyclingList::new(
            RecyclerConfig::new(Axis::Vertical, base).with_prewarm_items(4),
            LinearStrategy::new(Pad::default),
            row_factory(&live),
        );
        (list, live)
    }

    fn grid(columns: usize) -> RecyclingList<Row, GridStrategy<Pad>> {
        let live = Rc::new(Cell::new(0));
        let mut grid = RecyclingList::new(
            RecyclerConfig::new(Axis::Vertical, 10.0),
            GridStrategy::new(Pad::default),
            row_factory(&live),
        );
        grid.setup(Some(&LayoutDescriptor::new().with_columns(columns)))
            .unwrap();
        grid
    }

    fn collecting() -> (Diagnostics, impl FnMut(&Diagnostic) + 'static) {
        let seen: Diagnostics = Rc::default();
        let sink = {
            let seen = seen.clone();
            move |d: &Diagnostic| seen.borrow_mut().push(d.clone())
        };
        (seen, sink)
    }

    fn bound<S: crate::LayoutStrategy>(list: &RecyclingList<Row, S>) -> Vec<usize> {
        list.active_items()
            .iter()
            .map(|id| list.item(*id).unwrap().index.unwrap())
            .collect()
    }

    fn total_binds<S: crate::LayoutStrategy>(list: &RecyclingList<Row, S>) -> usize {
        list.active_items()
            .iter()
            .map(|id| list.item(*id).unwrap().binds)
            .sum()
    }

    fn items_follow_fillers<S: crate::LayoutStrategy>(list: &RecyclingList<Row, S>) -> bool {
        let fillers = list.children().filler_count();
        list.children()
            .iter()
            .take(fillers)
            .all(|c| matches!(c, Child::Filler(_)))
            && list
                .children()
                .items()
                .eq(list.active_items().iter().copied())
    }

    /// Scroll position that puts the first index of a 100 row, 50 unit viewport list at `first`.
    fn scroll_to(first: usize) -> f64 {
        (first as f64 + 0.5) / 95.0
    }

    #[test]
    fn one_row_of_travel_recycles_one_item() {
        let (mut list, _) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        assert!(list.update(&data, 50.0, scroll_to(10)).contains(Changes::REPOPULATED));
        assert_eq!(bound(&list), [10, 11, 12, 13, 14, 15]);

        let stats = list.pool_stats();
        let binds = total_binds(&list);
        let changes = list.update(&data, 50.0, scroll_to(11));
        assert!(changes.contains(Changes::SHIFTED));
        assert!(!changes.contains(Changes::REPOPULATED));
        assert!(!changes.contains(Changes::REBOUND));
        assert_eq!(bound(&list), [11, 12, 13, 14, 15, 16]);
        assert_eq!(total_binds(&list), binds + 1);
        assert_eq!(list.pool_stats(), stats, "no pool traffic for a shift");
        assert!(items_follow_fillers(&list));
    }

    #[test]
    fn long_jump_rebinds_without_pool_churn() {
        let (mut list, live) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        list.update(&data, 50.0, scroll_to(10));
        let stats = list.pool_stats();

        let changes = list.update(&data, 50.0, scroll_to(50));
        assert_eq!(
            changes,
            Changes::SHIFTED | Changes::REBOUND | Changes::SPACER_RESIZED
        );
        assert_eq!(bound(&list), [50, 51, 52, 53, 54, 55]);
        assert_eq!(list.pool_stats(), stats);
        assert_eq!(live.get(), 6);
        assert!(items_follow_fillers(&list));
    }

    #[test]
    fn repeated_update_is_a_no_op() {
        let (mut list, _) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        list.update(&data, 50.0, 0.3);
        let stats = list.pool_stats();
        let fillers = list.filler_stats();
        let binds = total_binds(&list);
        let children = list.children().clone();

        assert_eq!(list.update(&data, 50.0, 0.3), Changes::empty());
        assert_eq!(list.pool_stats(), stats);
        assert_eq!(list.filler_stats(), fillers);
        assert_eq!(total_binds(&list), binds);
        assert_eq!(list.children(), &children);
    }

    #[test]
    fn forward_then_back_restores_the_window() {
        let (mut list, _) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        for k in 1..20 {
            list.update(&data, 50.0, scroll_to(30));
            let items = list.active_items().to_vec();
            list.update(&data, 50.0, scroll_to(30 + k));
            list.update(&data, 50.0, scroll_to(30));
            assert_eq!(list.first_index(), Some(30));
            assert_eq!(bound(&list), [30, 31, 32, 33, 34, 35], "k={k}");
            assert_eq!(list.active_items(), items, "k={k}");
        }
    }

    #[test]
    fn linear_spacer_tracks_leading_extent() {
        let (mut list, _) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        let descriptor = LayoutDescriptor::new()
            .with_spacing(Vec2::new(0.0, 2.0))
            .with_padding(Insets::new(0.0, 4.0, 0.0, 6.0));
        list.setup(Some(&descriptor)).unwrap();
        let filler = list.strategy().spacer().handle().unwrap();

        // Element extent 12: a 60 unit viewport shows 5 rows.
        list.update(&data, 60.0, 0.0);
        assert!(list.filler(filler).unwrap().ignore);

        list.update(&data, 60.0, 0.5);
        let first = list.first_index().unwrap();
        assert_eq!(first, 47);
        let pad = list.filler(filler).unwrap();
        assert!(!pad.ignore);
        assert_eq!(pad.extent, 47.0 * 12.0 - 2.0);
        assert_eq!(list.children().position(Child::Filler(filler)), Some(0));
        assert_eq!(list.content_extent(), Some(100.0 * 12.0 + 10.0));
    }

    #[test]
    fn grid_shifts_keep_rows_in_order() {
        let mut grid = grid(5);
        let data: Vec<u32> = (0..100).collect();
        grid.update(&data, 55.0, 0.0);
        assert_eq!(grid.active_items().len(), 35);
        assert_eq!(grid.children().filler_count(), 0);

        // One row down: five items recycled, five filler cells added.
        let stats = grid.pool_stats();
        let changes = grid.update(&data, 55.0, 5.5 / 65.0);
        assert_eq!(changes, Changes::SHIFTED | Changes::SPACER_RESIZED);
        assert!(!changes.touched_pool(), "filler cells are not item pool traffic");
        assert_eq!(grid.first_index(), Some(5));
        assert_eq!(bound(&grid), (5..40).collect::<Vec<_>>());
        assert_eq!(grid.children().filler_count(), 5);
        assert_eq!(grid.pool_stats(), stats);
        assert!(items_follow_fillers(&grid));

        grid.update(&data, 55.0, 1.0);
        assert_eq!(grid.first_index(), Some(65));
        assert_eq!(bound(&grid), (65..100).collect::<Vec<_>>());
        assert_eq!(grid.children().filler_count(), 65);
        assert!(items_follow_fillers(&grid));

        grid.update(&data, 55.0, 0.0);
        assert_eq!(bound(&grid), (0..35).collect::<Vec<_>>());
        assert_eq!(grid.children().filler_count(), 0);
        assert_eq!(grid.pool_stats(), stats);
    }

    #[test]
    fn repeated_grid_update_after_a_shift_is_a_no_op() {
        let mut grid = grid(5);
        let data: Vec<u32> = (0..100).collect();
        grid.update(&data, 55.0, 0.0);
        grid.update(&data, 55.0, 5.5 / 65.0);
        assert_eq!(grid.first_index(), Some(5));
        let stats = grid.pool_stats();
        let fillers = grid.filler_stats();
        let binds = total_binds(&grid);
        let children = grid.children().clone();

        assert_eq!(grid.update(&data, 55.0, 5.5 / 65.0), Changes::empty());
        assert_eq!(grid.pool_stats(), stats);
        assert_eq!(grid.filler_stats(), fillers);
        assert_eq!(total_binds(&grid), binds);
        assert_eq!(grid.children(), &children);
        assert_eq!(bound(&grid), (5..40).collect::<Vec<_>>());
    }

    #[test]
    fn large_grid_drags_stay_linear() {
        const RECORDS: u32 = 200_000;
        let mut grid = grid(4);
        let data: Vec<u32> = (0..RECORDS).collect();
        // 7 visible lines of 4 cells.
        let last = RECORDS as usize - 28;
        let span = RECORDS as f64 - 28.0;

        let started = Instant::now();
        grid.update(&data, 55.0, 0.0);
        grid.update(&data, 55.0, 1.0);
        assert_eq!(grid.first_index(), Some(last));
        assert_eq!(grid.children().filler_count(), last);

        // One line back from the end: four cells leave the spacer.
        let fillers = grid.filler_stats();
        let stats = grid.pool_stats();
        let changes = grid.update(&data, 55.0, (last as f64 - 4.0 + 0.5) / span);
        assert_eq!(changes, Changes::SHIFTED | Changes::SPACER_RESIZED);
        assert_eq!(grid.first_index(), Some(last - 4));
        assert_eq!(grid.children().filler_count(), last - 4);
        assert_eq!(grid.filler_stats().released, fillers.released + 4);
        assert_eq!(grid.filler_stats().acquired, fillers.acquired);
        assert_eq!(grid.pool_stats(), stats);
        assert_eq!(bound(&grid), (last - 4..last + 24).collect::<Vec<_>>());

        grid.update(&data, 55.0, 0.0);
        let elapsed = started.elapsed();
        assert_eq!(grid.children().filler_count(), 0);
        assert_eq!(bound(&grid), (0..28).collect::<Vec<_>>());
        assert!(items_follow_fillers(&grid));
        // Quadratic filler bookkeeping takes tens of seconds at this size.
        assert!(elapsed < Duration::from_secs(5), "drags took {elapsed:?}");
    }

    #[test]
    fn grid_partial_last_line_keeps_columns() {
        let mut grid = grid(4);
        let data: Vec<u32> = (0..23).collect();
        grid.update(&data, 20.0, 1.0);
        assert_eq!(grid.first_index(), Some(11));
        // One filler per culled cell keeps the tail aligned to its columns.
        assert_eq!(grid.children().filler_count(), 11);
        assert_eq!(bound(&grid), (11..23).collect::<Vec<_>>());
    }

    #[test]
    fn setup_runs_once_and_reports_missing_descriptor() {
        let (seen, sink) = collecting();
        let (list, _) = list(10.0);
        let mut list = list.with_diagnostics(sink);
        list.setup(None).unwrap();
        let created = list.pool_stats().created;
        assert_eq!(created, 4);
        list.setup(Some(&LayoutDescriptor::new().with_spacing(Vec2::new(0.0, 5.0))))
            .unwrap();
        assert_eq!(list.pool_stats().created, created);
        assert_eq!(list.metrics().unwrap().spacing, 0.0, "second setup is ignored");
        assert_eq!(
            *seen.borrow(),
            [Diagnostic::MissingLayoutDescriptor { layout: "linear" }]
        );
    }

    #[test]
    fn failed_setup_can_be_retried() {
        let live = Rc::new(Cell::new(0));
        let mut grid = RecyclingList::new(
            RecyclerConfig::new(Axis::Vertical, 10.0),
            GridStrategy::new(Pad::default),
            row_factory(&live),
        );
        assert_eq!(
            grid.setup(Some(&LayoutDescriptor::new().with_columns(0))),
            Err(SetupError::ZeroColumns)
        );
        assert!(!grid.is_ready());
        grid.setup(Some(&LayoutDescriptor::new().with_columns(3)))
            .unwrap();
        assert_eq!(grid.metrics().unwrap().constraint_count.get(), 3);
    }

    #[test]
    fn update_before_setup_is_reported() {
        let (seen, sink) = collecting();
        let (list, _) = list(10.0);
        let mut list = list.with_diagnostics(sink);
        let data = [1_u32, 2, 3];
        assert_eq!(list.update(&data, 50.0, 0.0), Changes::empty());
        assert!(list.active_items().is_empty());
        assert_eq!(*seen.borrow(), [Diagnostic::UpdateBeforeSetup]);
    }

    #[test]
    fn empty_and_small_data_sets() {
        let (mut list, live) = list(10.0);
        list.setup(None).unwrap();
        let empty: [u32; 0] = [];
        list.update(&empty, 50.0, 0.7);
        assert!(list.active_items().is_empty());
        assert_eq!(list.first_index(), Some(0));
        assert_eq!(live.get(), 0);

        let small: Vec<u32> = (0..3).collect();
        list.update(&small, 50.0, 0.7);
        assert_eq!(bound(&list), [0, 1, 2]);
        assert_eq!(live.get(), 3);
    }

    #[test]
    fn viewport_resize_repopulates() {
        let (mut list, _) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        list.update_with_viewport(&data, Size::new(300.0, 50.0), 0.0);
        assert_eq!(list.active_items().len(), 6);
        let changes = list.update_with_viewport(&data, Size::new(300.0, 80.0), 0.0);
        assert!(changes.contains(Changes::REPOPULATED));
        assert_eq!(bound(&list), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn data_change_rebinds_in_place() {
        let (mut list, _) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        list.update(&data, 50.0, 0.2);
        let stats = list.pool_stats();
        let binds = total_binds(&list);

        list.notify_data_changed();
        assert_eq!(list.update(&data, 50.0, 0.2), Changes::REBOUND);
        assert_eq!(total_binds(&list), binds + 6);
        assert_eq!(list.pool_stats(), stats);
        // The request is consumed.
        assert!(list.update(&data, 50.0, 0.2).is_empty());
    }

    #[test]
    fn reset_releases_and_next_update_repopulates() {
        let (mut list, live) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        list.update(&data, 50.0, 0.5);
        assert_eq!(live.get(), 6);

        list.reset();
        assert_eq!(live.get(), 0);
        assert!(list.active_items().is_empty());
        assert_eq!(list.children().items().count(), 0);
        assert_eq!(list.children().filler_count(), 1, "linear filler is reattached");

        assert!(list.update(&data, 50.0, 0.5).contains(Changes::REPOPULATED));
        assert_eq!(live.get(), 6);
        assert!(items_follow_fillers(&list));
    }

    #[test]
    fn teardown_and_drop_release_everything() {
        let (mut list, live) = list(10.0);
        let data: Vec<u32> = (0..100).collect();
        list.setup(None).unwrap();
        list.update(&data, 50.0, 0.5);
        list.teardown();
        assert_eq!(live.get(), 0);
        assert!(list.children().is_empty());
        assert!(!list.is_ready());
        assert!(list.update(&data, 50.0, 0.6).is_empty());
        list.teardown();

        let (mut list, live) = self::list(10.0);
        list.setup(None).unwrap();
        list.update(&data, 50.0, 0.5);
        assert_eq!(live.get(), 6);
        drop(list);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn offsets_map_to_normalized_positions() {
        let (mut list, _) = list(10.0);
        assert_eq!(list.normalized_for_offset(100, 250.0, 50.0), 0.0);
        list.setup(None).unwrap();
        // 1000 units of content in a 50 unit viewport.
        assert_eq!(list.content_extent_for(100), Some(1000.0));
        assert_eq!(list.normalized_for_offset(100, 0.0, 50.0), 0.0);
        assert_eq!(list.normalized_for_offset(100, 475.0, 50.0), 0.5);
        assert_eq!(list.normalized_for_offset(100, 2000.0, 50.0), 1.0);
    }
}
