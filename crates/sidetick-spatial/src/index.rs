//! R-tree index over one generation's entity snapshots.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sidetick_core::{EntityKind, Vec3};
use sidetick_snapshot::EntitySnapshot;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 3-D point with its snapshot payload.
#[derive(Clone)]
struct SnapEntry {
    point: [f64; 3],
    snap:  EntitySnapshot,
}

impl SnapEntry {
    fn new(snap: EntitySnapshot) -> Self {
        let p = snap.position;
        Self { point: [p.x, p.y, p.z], snap }
    }
}

impl RTreeObject for SnapEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SnapEntry {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── SnapshotIndex ─────────────────────────────────────────────────────────────

/// Read-only spatial index over a batch's entity snapshots.
///
/// Built once per batch with an O(n log n) bulk load, then shared immutably
/// across worker threads.  Query results are deterministic for identical
/// input: ties on distance are broken by lowest entity id.
pub struct SnapshotIndex {
    tree: RTree<SnapEntry>,
}

impl SnapshotIndex {
    /// Bulk-load the index from a generation's snapshots.
    pub fn build<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = EntitySnapshot>,
    {
        let entries: Vec<SnapEntry> = entities.into_iter().map(SnapEntry::new).collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The entry of `kind` with minimum Euclidean distance to `center`, if
    /// any lies within (≤) `max_radius`.
    ///
    /// Ties on distance resolve to the lowest entity id so repeated queries
    /// over the same input are reproducible.
    pub fn nearest_of_kind(
        &self,
        kind:       EntityKind,
        center:     Vec3,
        max_radius: f64,
    ) -> Option<EntitySnapshot> {
        let point = [center.x, center.y, center.z];
        let mut best: Option<(f64, EntitySnapshot)> = None;

        for entry in self.tree.locate_within_distance(point, max_radius * max_radius) {
            if entry.snap.kind != kind {
                continue;
            }
            let d2 = entry.distance_2(&point);
            let better = match best {
                None => true,
                Some((best_d2, best_snap)) => {
                    d2 < best_d2 || (d2 == best_d2 && entry.snap.id < best_snap.id)
                }
            };
            if better {
                best = Some((d2, entry.snap));
            }
        }

        best.map(|(_, snap)| snap)
    }

    /// All entries within (≤) `radius` of `center`, sorted by ascending
    /// `(distance, id)`.
    ///
    /// Includes the entity at `center` itself when it is indexed — callers
    /// that want neighbors must filter their own id out.
    pub fn within(&self, center: Vec3, radius: f64) -> Vec<EntitySnapshot> {
        let point = [center.x, center.y, center.z];
        let mut found: Vec<(f64, EntitySnapshot)> = self
            .tree
            .locate_within_distance(point, radius * radius)
            .map(|entry| (entry.distance_2(&point), entry.snap))
            .collect();

        found.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.id.cmp(&b.1.id))
        });
        found.into_iter().map(|(_, snap)| snap).collect()
    }
}
