// crates/tripmap-core/src/map.rs

//! # Map Coordinator
//!
//! Single-threaded owner of the shared map state: the query cache, the
//! boundary set, and the selection. Everything here runs synchronously in
//! response to discrete events (UI interactions or load completions); the
//! resolver and styling engine only ever see read-only views.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::alias::AliasTable;
use crate::boundary::BoundaryFeature;
use crate::cache::{CacheState, LoadTicket, QueryCache, QueryKey};
use crate::centers::country_center;
use crate::model::{Country, CountryId, Postcard};
use crate::resolve::Registry;
use crate::selection::{Interaction, Selection};
use crate::style::{style_for, MapStyle};

/// One-shot initialization handshake with the external map library.
///
/// `Pending` waits for the library's ready signal up to a bounded timeout;
/// `Failed` is terminal for the session and puts the view into the
/// degraded fallback rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Idle,
    Pending { waited: Duration, timeout: Duration },
    Ready,
    Failed,
}

/// Load state of a marker image, driving rendered output declaratively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A transient, user-visible notification. Failures never escalate past
/// these; the rest of the map keeps rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// An image marker placed at a country's center, summarizing its postcards.
#[derive(Debug, Clone, PartialEq)]
pub struct PostcardMarker {
    pub country_id: CountryId,
    pub position: (f64, f64),
    pub count: usize,
    /// First postcard's image source; the badge shows `count` when > 1.
    pub image: Option<String>,
    pub rotation: Option<f64>,
    pub image_state: ImageLoadState,
}

/// Styling seam toward the map rendering library: one call per boundary
/// per pass, in dataset order.
pub trait BoundaryRenderer {
    fn apply_style(&mut self, feature: &BoundaryFeature, style: &MapStyle);
}

/// Proof that a boundary load was started; stale completions are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTicket(u64);

/// Top-level coordinator for the travel map.
pub struct MapView {
    cache: QueryCache,
    aliases: &'static AliasTable,
    boundaries: CacheState<Vec<BoundaryFeature>>,
    boundary_generation: u64,
    selection: Selection,
    init: InitState,
    image_states: HashMap<CountryId, ImageLoadState>,
    notices: VecDeque<Notice>,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView {
    pub fn new() -> Self {
        Self::with_aliases(AliasTable::builtin())
    }

    pub fn with_aliases(aliases: &'static AliasTable) -> Self {
        Self {
            cache: QueryCache::new(),
            aliases,
            boundaries: CacheState::Loading,
            boundary_generation: 0,
            selection: Selection::default(),
            init: InitState::Idle,
            image_states: HashMap::new(),
            notices: VecDeque::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Map library initialization
    // ---------------------------------------------------------------------

    /// Starts the one-shot initialization wait with a bounded timeout.
    pub fn begin_init(&mut self, timeout: Duration) {
        self.init = InitState::Pending {
            waited: Duration::ZERO,
            timeout,
        };
    }

    /// Advances the initialization clock. A pending wait that exceeds its
    /// timeout fails, leaving the view in degraded fallback mode.
    pub fn tick(&mut self, elapsed: Duration) -> InitState {
        if let InitState::Pending { waited, timeout } = self.init {
            let waited = waited + elapsed;
            self.init = if waited >= timeout {
                InitState::Failed
            } else {
                InitState::Pending { waited, timeout }
            };
        }
        self.init
    }

    /// The map library signalled readiness.
    pub fn confirm_init(&mut self) {
        if matches!(self.init, InitState::Pending { .. }) {
            self.init = InitState::Ready;
        }
    }

    /// The map library failed to load (bad credentials, network failure).
    pub fn fail_init(&mut self) {
        self.init = InitState::Failed;
    }

    pub fn init_state(&self) -> InitState {
        self.init
    }

    /// Degraded mode renders the simplified fallback map instead of the
    /// interactive boundary layer.
    pub fn is_degraded(&self) -> bool {
        self.init == InitState::Failed
    }

    // ---------------------------------------------------------------------
    // Data loading
    // ---------------------------------------------------------------------

    /// Starts a boundary dataset load; supersedes any in-flight one.
    pub fn begin_boundary_load(&mut self) -> BoundaryTicket {
        self.boundary_generation += 1;
        if matches!(self.boundaries, CacheState::Failed(_)) {
            self.boundaries = CacheState::Loading;
        }
        BoundaryTicket(self.boundary_generation)
    }

    /// Completes a boundary load. A superseded ticket is discarded so a
    /// stale dataset can never replace a newer one.
    pub fn complete_boundary_load(
        &mut self,
        ticket: BoundaryTicket,
        result: Result<Vec<BoundaryFeature>, String>,
    ) -> bool {
        if ticket.0 != self.boundary_generation {
            return false;
        }
        self.boundaries = match result {
            Ok(features) => CacheState::Ready(features),
            Err(msg) => CacheState::Failed(msg),
        };
        true
    }

    pub fn boundaries(&self) -> &CacheState<Vec<BoundaryFeature>> {
        &self.boundaries
    }

    pub fn begin_load(&mut self, key: QueryKey) -> LoadTicket {
        self.cache.begin_load(key)
    }

    pub fn complete_countries(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Country>, String>,
    ) -> bool {
        if let Err(msg) = &result {
            self.notify_error(format!("Could not load countries: {msg}"));
        }
        self.cache.complete_countries(ticket, result)
    }

    pub fn complete_postcards(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Postcard>, String>,
    ) -> bool {
        if let Err(msg) = &result {
            self.notify_error(format!("Could not load postcards: {msg}"));
        }
        self.cache.complete_postcards(ticket, result)
    }

    /// Marks a query stale after a confirmed server-side change. The local
    /// state is never mutated optimistically; the next accepted load
    /// carries the confirmed data.
    pub fn invalidate(&mut self, key: QueryKey) {
        self.cache.invalidate(key);
    }

    pub fn is_stale(&self, key: QueryKey) -> bool {
        self.cache.is_stale(key)
    }

    pub fn data_version(&self, key: QueryKey) -> u64 {
        self.cache.version(key)
    }

    pub fn countries(&self) -> &CacheState<Vec<Country>> {
        self.cache.countries()
    }

    pub fn postcards(&self) -> &CacheState<Vec<Postcard>> {
        self.cache.postcards()
    }

    // ---------------------------------------------------------------------
    // Styling
    // ---------------------------------------------------------------------

    /// Styling is gated on both the boundary set and the country list; the
    /// first pass must not run before both completed loading.
    pub fn ready_to_style(&self) -> bool {
        self.boundaries.is_ready() && self.cache.countries().is_ready()
    }

    /// Computes styles for the entire boundary set in one pass.
    ///
    /// Returns `None` while gated. Every trigger restyles everything;
    /// there is no partial update.
    pub fn style_pass(&self) -> Option<Vec<(&BoundaryFeature, MapStyle)>> {
        let features = self.boundaries.ready()?;
        let countries = self.cache.countries().ready()?;

        let registry = Registry::new(countries, self.aliases);
        let selected = self.selection.selected();

        Some(
            features
                .iter()
                .map(|feature| {
                    let country = registry.resolve(&feature.name);
                    (feature, style_for(country, selected))
                })
                .collect(),
        )
    }

    /// Applies a full style pass through the renderer seam. Returns
    /// `false` while gated (nothing is applied).
    pub fn render_pass(&self, renderer: &mut dyn BoundaryRenderer) -> bool {
        match self.style_pass() {
            Some(styles) => {
                for (feature, style) in &styles {
                    renderer.apply_style(feature, style);
                }
                true
            }
            None => false,
        }
    }

    /// Degraded-mode styling: per-country styles for the simplified
    /// fallback map, available as soon as the country list is.
    pub fn fallback_pass(&self) -> Option<Vec<(CountryId, MapStyle)>> {
        let countries = self.cache.countries().ready()?;
        let selected = self.selection.selected();
        Some(
            countries
                .iter()
                .map(|c| (c.id, style_for(Some(c), selected)))
                .collect(),
        )
    }

    // ---------------------------------------------------------------------
    // Interaction
    // ---------------------------------------------------------------------

    /// Handles a click/tap on a boundary. Unmapped boundaries are inert.
    pub fn handle_boundary_interaction(&mut self, boundary_name: &str) -> Option<Interaction> {
        let countries = self.cache.countries().ready()?;
        let registry = Registry::new(countries, self.aliases);
        let country = registry.resolve(boundary_name)?;
        Some(self.selection.interact(country.id))
    }

    /// Handles a click/tap on a postcard marker.
    pub fn handle_marker_interaction(&mut self, country_id: CountryId) -> Interaction {
        self.selection.interact(country_id)
    }

    /// The detail view was explicitly closed.
    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    pub fn selected(&self) -> Option<CountryId> {
        self.selection.selected()
    }

    // ---------------------------------------------------------------------
    // Postcard markers
    // ---------------------------------------------------------------------

    /// Computes the postcard markers for countries with at least one
    /// postcard and a known center. Empty until both the country list and
    /// the postcards are loaded.
    pub fn markers(&self) -> Vec<PostcardMarker> {
        let (Some(countries), Some(postcards)) = (
            self.cache.countries().ready(),
            self.cache.postcards().ready(),
        ) else {
            return Vec::new();
        };

        let mut by_country: HashMap<CountryId, Vec<&Postcard>> = HashMap::new();
        for postcard in postcards {
            by_country.entry(postcard.country_id).or_default().push(postcard);
        }

        let mut markers = Vec::new();
        for country in countries {
            let Some(cards) = by_country.get(&country.id) else {
                continue;
            };
            let Some(position) = country_center(&country.code) else {
                continue;
            };
            let main = cards[0];
            markers.push(PostcardMarker {
                country_id: country.id,
                position,
                count: cards.len(),
                image: main.image_source(),
                rotation: main.rotation,
                image_state: self
                    .image_states
                    .get(&country.id)
                    .copied()
                    .unwrap_or_default(),
            });
        }
        markers
    }

    /// Records the load outcome of a marker image; the marker renders from
    /// this state instead of mutating anything on error.
    pub fn set_image_state(&mut self, country_id: CountryId, state: ImageLoadState) {
        self.image_states.insert(country_id, state);
    }

    // ---------------------------------------------------------------------
    // Notices
    // ---------------------------------------------------------------------

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        });
    }

    /// Drains pending notices; they are transient and shown once.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VisitStatus;
    use crate::style::{FILL_UPCOMING, FILL_VISITED, STROKE_SELECTED};

    fn country(id: CountryId, code: &str, name: &str, status: VisitStatus) -> Country {
        Country {
            id,
            code: code.to_string(),
            name: name.to_string(),
            status,
            visited_date: match status {
                VisitStatus::Visited => Some("2024-01-01".into()),
                _ => None,
            },
        }
    }

    fn boundaries(names: &[&str]) -> Vec<BoundaryFeature> {
        names.iter().map(|n| BoundaryFeature::new(*n)).collect()
    }

    fn loaded_view() -> MapView {
        let mut view = MapView::new();
        let ticket = view.begin_boundary_load();
        view.complete_boundary_load(
            ticket,
            Ok(boundaries(&["United States of America", "France", "Atlantis"])),
        );
        let ticket = view.begin_load(QueryKey::Countries);
        view.complete_countries(
            ticket,
            Ok(vec![
                country(1, "US", "United States", VisitStatus::Visited),
                country(2, "FR", "France", VisitStatus::Upcoming),
            ]),
        );
        view
    }

    #[test]
    fn styling_is_gated_until_both_datasets_ready() {
        let mut view = MapView::new();
        assert!(view.style_pass().is_none());

        let ticket = view.begin_boundary_load();
        view.complete_boundary_load(ticket, Ok(boundaries(&["France"])));
        assert!(!view.ready_to_style());
        assert!(view.style_pass().is_none());

        let ticket = view.begin_load(QueryKey::Countries);
        view.complete_countries(
            ticket,
            Ok(vec![country(2, "FR", "France", VisitStatus::Upcoming)]),
        );
        assert!(view.ready_to_style());
        assert_eq!(view.style_pass().unwrap().len(), 1);
    }

    #[test]
    fn full_pass_styles_every_boundary() {
        let view = loaded_view();
        let styles = view.style_pass().unwrap();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0].1.fill_color, FILL_VISITED);
        assert_eq!(styles[1].1.fill_color, FILL_UPCOMING);
        // Unmapped boundary: neutral default.
        assert_eq!(styles[2].1.fill_opacity, 0.2);
    }

    #[test]
    fn selection_marks_exactly_one_boundary() {
        let mut view = loaded_view();
        view.handle_boundary_interaction("France");

        let styles = view.style_pass().unwrap();
        let selected: Vec<_> = styles
            .iter()
            .filter(|(_, s)| s.stroke_color == STROKE_SELECTED)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0.name, "France");
    }

    #[test]
    fn data_update_recolors_on_next_pass() {
        let mut view = loaded_view();

        view.invalidate(QueryKey::Countries);
        assert!(view.is_stale(QueryKey::Countries));
        let ticket = view.begin_load(QueryKey::Countries);
        view.complete_countries(
            ticket,
            Ok(vec![
                country(1, "US", "United States", VisitStatus::Visited),
                country(2, "FR", "France", VisitStatus::Visited),
            ]),
        );

        let styles = view.style_pass().unwrap();
        assert_eq!(styles[1].1.fill_color, FILL_VISITED);
    }

    #[test]
    fn unmapped_boundary_interaction_is_inert() {
        let mut view = loaded_view();
        assert!(view.handle_boundary_interaction("Atlantis").is_none());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn repeated_interaction_requests_detail() {
        let mut view = loaded_view();
        assert_eq!(
            view.handle_boundary_interaction("France"),
            Some(Interaction::Selected(2))
        );
        assert_eq!(
            view.handle_boundary_interaction("France"),
            Some(Interaction::DetailRequested(2))
        );
    }

    #[test]
    fn init_timeout_degrades() {
        let mut view = MapView::new();
        view.begin_init(Duration::from_secs(5));
        assert_eq!(
            view.tick(Duration::from_secs(2)),
            InitState::Pending {
                waited: Duration::from_secs(2),
                timeout: Duration::from_secs(5)
            }
        );
        assert_eq!(view.tick(Duration::from_secs(4)), InitState::Failed);
        assert!(view.is_degraded());
        // Degraded mode still styles per country for the fallback map.
        let mut view = loaded_view();
        view.fail_init();
        assert!(view.fallback_pass().is_some());
    }

    #[test]
    fn confirm_beats_timeout() {
        let mut view = MapView::new();
        view.begin_init(Duration::from_secs(5));
        view.tick(Duration::from_secs(2));
        view.confirm_init();
        assert_eq!(view.init_state(), InitState::Ready);
        // Further ticks are no-ops once ready.
        assert_eq!(view.tick(Duration::from_secs(60)), InitState::Ready);
    }

    #[test]
    fn stale_boundary_load_is_discarded() {
        let mut view = MapView::new();
        let first = view.begin_boundary_load();
        let second = view.begin_boundary_load();
        assert!(view.complete_boundary_load(second, Ok(boundaries(&["France", "Japan"]))));
        assert!(!view.complete_boundary_load(first, Ok(boundaries(&["France"]))));
        assert_eq!(view.boundaries().ready().unwrap().len(), 2);
    }

    #[test]
    fn load_failure_queues_notice_and_keeps_rendering() {
        let mut view = loaded_view();
        view.invalidate(QueryKey::Countries);
        let ticket = view.begin_load(QueryKey::Countries);
        view.complete_countries(ticket, Err("502 Bad Gateway".into()));

        let notices = view.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        // Notices drain once.
        assert!(view.take_notices().is_empty());
    }

    #[test]
    fn markers_group_postcards_by_country() {
        let mut view = loaded_view();
        let ticket = view.begin_load(QueryKey::Postcards);
        view.complete_postcards(
            ticket,
            Ok(vec![
                Postcard {
                    id: 1,
                    country_id: 2,
                    filename: Some("louvre.jpg".into()),
                    image_url: None,
                    rotation: Some(3.0),
                },
                Postcard {
                    id: 2,
                    country_id: 2,
                    filename: Some("eiffel.jpg".into()),
                    image_url: None,
                    rotation: None,
                },
            ]),
        );

        let markers = view.markers();
        assert_eq!(markers.len(), 1);
        let marker = &markers[0];
        assert_eq!(marker.country_id, 2);
        assert_eq!(marker.count, 2);
        assert_eq!(marker.image.as_deref(), Some("/uploads/louvre.jpg"));
        assert_eq!(marker.image_state, ImageLoadState::Loading);
    }

    #[test]
    fn marker_image_failure_is_declarative() {
        let mut view = loaded_view();
        let ticket = view.begin_load(QueryKey::Postcards);
        view.complete_postcards(
            ticket,
            Ok(vec![Postcard {
                id: 1,
                country_id: 1,
                filename: None,
                image_url: Some("https://img.example/nyc.jpg".into()),
                rotation: None,
            }]),
        );

        view.set_image_state(1, ImageLoadState::Failed);
        let markers = view.markers();
        assert_eq!(markers[0].image_state, ImageLoadState::Failed);
    }
}
