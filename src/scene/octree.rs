//! Bucketed octree of placed marks.
//!
//! Marks live in leaf buckets. A full leaf splits into eight children, which
//! take over its marks. Visibility queries walk octants that intersect the
//! view frustum, farthest first, so the returned instance stream is roughly
//! back-to-front (what alpha blending wants).

use std::ops::{Index, IndexMut};

use glam::Vec3;

use crate::{
    camera::frustum::Frustum, marker::ModelInstance, options::SceneOptions,
};

/// Index of a node in the octant arena.
type OctantId = u32;

/// Leaves this small stop splitting, so coincident marks cannot recurse
/// forever.
const MIN_HALF_EXTENT: f32 = 1e-3;

#[derive(Debug)]
enum Content {
    Parent([OctantId; 8]),
    Leaf(Vec<ModelInstance>),
}

/// One cubic cell of the tree.
#[derive(Debug)]
pub struct Octant {
    center: Vec3,
    half_extent: f32,
    content: Content,
}

impl Octant {
    fn leaf(center: Vec3, half_extent: f32, marks: Vec<ModelInstance>) -> Self {
        Self {
            center,
            half_extent,
            content: Content::Leaf(marks),
        }
    }

    /// Half-open containment: `[center − e, center + e)` on every axis.
    #[inline]
    fn contains(&self, p: Vec3) -> bool {
        let min = self.center - self.half_extent;
        let max = self.center + self.half_extent;
        p.cmpge(min).all() && p.cmplt(max).all()
    }

    /// Child slot for `p`: bit `i` is set when `p` lies above the center on
    /// axis `i`.
    #[inline]
    fn child_slot(&self, p: Vec3) -> usize {
        let above = p.cmpgt(self.center);
        usize::from(above.x)
            | (usize::from(above.y) << 1)
            | (usize::from(above.z) << 2)
    }

    /// Center of the child in `slot`.
    fn child_center(&self, slot: usize) -> Vec3 {
        let child_half = self.half_extent / 2.0;
        let offset = Vec3::new(
            if slot & 1 == 0 { -child_half } else { child_half },
            if slot & 2 == 0 { -child_half } else { child_half },
            if slot & 4 == 0 { -child_half } else { child_half },
        );
        self.center + offset
    }
}

/// Store of placed marks with frustum-culled, distance-ordered queries.
#[derive(Debug)]
pub struct MarkOctree {
    root: OctantId,
    bucket_size: usize,
    max_visible: usize,
    octants: Vec<Octant>,
}

impl MarkOctree {
    /// Empty tree spanning `[-extent, extent)³`.
    pub fn new(options: &SceneOptions) -> Self {
        let bucket_size = options.bucket_size.max(1) as usize;
        Self {
            root: 0,
            bucket_size,
            max_visible: options.max_visible,
            octants: vec![Octant::leaf(
                Vec3::ZERO,
                options.extent,
                Vec::with_capacity(bucket_size),
            )],
        }
    }

    /// Insert a mark. Returns `false` (and drops it) when its position lies
    /// outside the root cube.
    pub fn insert(&mut self, mark: ModelInstance) -> bool {
        let pos = Vec3::from_array(mark.pos);
        if !self[self.root].contains(pos) {
            log::warn!("mark at {pos} outside octree bounds, dropped");
            return false;
        }

        let mut id = self.root;
        loop {
            let octant = &self[id];
            let full = match &octant.content {
                Content::Parent(children) => {
                    id = children[octant.child_slot(pos)];
                    continue;
                }
                Content::Leaf(marks) => {
                    marks.len() >= self.bucket_size
                        && octant.half_extent > MIN_HALF_EXTENT
                }
            };
            if !full {
                break;
            }
            self.split(id);
        }

        if let Content::Leaf(marks) = &mut self[id].content {
            marks.push(mark);
        }
        true
    }

    /// Turn a full leaf into a parent with eight leaf children holding its
    /// marks.
    fn split(&mut self, id: OctantId) {
        let bucket_size = self.bucket_size;
        let first = self.octants.len() as OctantId;

        let octant = &mut self[id];
        let Content::Leaf(marks) = &mut octant.content else {
            return;
        };
        let marks = std::mem::take(marks);
        octant.content = Content::Parent(std::array::from_fn(|slot| {
            first + slot as OctantId
        }));

        let mut buckets: [Vec<ModelInstance>; 8] =
            std::array::from_fn(|_| Vec::with_capacity(bucket_size));
        for mark in marks {
            buckets[octant.child_slot(Vec3::from_array(mark.pos))].push(mark);
        }

        let children: Vec<Octant> = buckets
            .into_iter()
            .enumerate()
            .map(|(slot, bucket)| {
                Octant::leaf(
                    octant.child_center(slot),
                    octant.half_extent / 2.0,
                    bucket,
                )
            })
            .collect();
        self.octants.extend(children);
    }

    /// Number of stored marks.
    pub fn len(&self) -> usize {
        self.octants
            .iter()
            .map(|o| match &o.content {
                Content::Leaf(marks) => marks.len(),
                Content::Parent(_) => 0,
            })
            .sum()
    }

    /// Whether no mark has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of octants (leaves and parents).
    pub fn octant_count(&self) -> usize {
        self.octants.len()
    }

    /// Upper bound on marks returned by [`Self::visible`].
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Collect marks in frustum-intersecting leaves into `out`.
    ///
    /// `out` is cleared first. Children are visited farthest-from-`eye`
    /// first and collection stops at [`Self::max_visible`] marks.
    pub fn visible(
        &self,
        out: &mut Vec<ModelInstance>,
        eye: Vec3,
        frustum: &Frustum,
    ) {
        out.clear();
        self.visible_rec(out, self.root, eye, frustum);
        log::debug!(
            "octree query: {} visible of {} marks",
            out.len(),
            self.len()
        );
    }

    fn visible_rec(
        &self,
        out: &mut Vec<ModelInstance>,
        id: OctantId,
        eye: Vec3,
        frustum: &Frustum,
    ) {
        if out.len() >= self.max_visible {
            return;
        }
        let octant = &self[id];
        if !frustum.intersects_cube(octant.center, octant.half_extent) {
            return;
        }

        match &octant.content {
            Content::Parent(children) => {
                let mut children = *children;
                children.sort_unstable_by(|&a, &b| {
                    let dist_a = self[a].center.distance_squared(eye);
                    let dist_b = self[b].center.distance_squared(eye);
                    dist_b.total_cmp(&dist_a)
                });
                for child in children {
                    self.visible_rec(out, child, eye, frustum);
                }
            }
            Content::Leaf(marks) => {
                let room = self.max_visible - out.len();
                out.extend_from_slice(&marks[..room.min(marks.len())]);
            }
        }
    }
}

impl Index<OctantId> for MarkOctree {
    type Output = Octant;
    fn index(&self, index: OctantId) -> &Self::Output {
        &self.octants[index as usize]
    }
}

impl IndexMut<OctantId> for MarkOctree {
    fn index_mut(&mut self, index: OctantId) -> &mut Self::Output {
        &mut self.octants[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::marker::InstanceRecord;

    fn mark(p: Vec3) -> ModelInstance {
        ModelInstance::from(&InstanceRecord::Position(p))
    }

    fn small_tree() -> MarkOctree {
        MarkOctree::new(&SceneOptions {
            bucket_size: 4,
            extent: 50.0,
            max_visible: 10_000,
        })
    }

    fn everything_frustum() -> Frustum {
        // Orthographic box much larger than the tree, looking down -Z
        let proj =
            Mat4::orthographic_rh(-500.0, 500.0, -500.0, 500.0, 0.0, 2000.0);
        let eye = Vec3::new(0.0, 0.0, 1000.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn rejects_marks_outside_bounds() {
        let mut tree = small_tree();
        assert!(!tree.insert(mark(Vec3::new(50.0, 0.0, 0.0))));
        assert!(!tree.insert(mark(Vec3::new(0.0, -50.5, 0.0))));
        assert!(tree.insert(mark(Vec3::new(-50.0, 0.0, 49.9))));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn full_leaves_split_and_keep_every_mark() {
        let mut tree = small_tree();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = Vec3::new(
                rng.random_range(-49.0..49.0),
                rng.random_range(-49.0..49.0),
                rng.random_range(-49.0..49.0),
            );
            assert!(tree.insert(mark(p)));
        }
        assert_eq!(tree.len(), 500);
        assert!(tree.octant_count() > 1);
        assert_eq!((tree.octant_count() - 1) % 8, 0);

        let mut out = Vec::new();
        let eye = Vec3::new(0.0, 0.0, 1000.0);
        tree.visible(&mut out, eye, &everything_frustum());
        assert_eq!(out.len(), 500);
    }

    #[test]
    fn marks_land_in_the_leaf_that_contains_them() {
        let mut tree = small_tree();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let p = Vec3::new(
                rng.random_range(-49.0..49.0),
                rng.random_range(-49.0..49.0),
                rng.random_range(-49.0..49.0),
            );
            let _ = tree.insert(mark(p));
        }
        for octant in &tree.octants {
            if let Content::Leaf(marks) = &octant.content {
                for m in marks {
                    let p = Vec3::from_array(m.pos);
                    let d = (p - octant.center).abs().max_element();
                    assert!(d <= octant.half_extent + 1e-4);
                }
            }
        }
    }

    #[test]
    fn culls_octants_outside_the_frustum() {
        let mut tree = small_tree();
        for i in 0..20 {
            let x = i as f32 * 2.0 - 20.0;
            assert!(tree.insert(mark(Vec3::new(x, 0.0, -30.0))));
            assert!(tree.insert(mark(Vec3::new(x, 0.0, 30.0))));
        }
        // Camera at z=10 looking toward -Z: only the z=-30 row is ahead
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let proj = Mat4::perspective_rh(90.0_f32.to_radians(), 1.0, 0.1, 200.0);
        let view = Mat4::look_at_rh(eye, Vec3::new(0.0, 0.0, -30.0), Vec3::Y);
        let frustum = Frustum::from_view_projection(proj * view);

        let mut out = Vec::new();
        tree.visible(&mut out, eye, &frustum);
        assert!(!out.is_empty());
        assert!(out.iter().all(|m| m.pos[2] < 0.0));
    }

    #[test]
    fn query_respects_max_visible() {
        let mut tree = MarkOctree::new(&SceneOptions {
            bucket_size: 4,
            extent: 50.0,
            max_visible: 7,
        });
        for i in 0..40 {
            assert!(tree.insert(mark(Vec3::new(i as f32 - 20.0, 1.0, 1.0))));
        }
        let mut out = vec![mark(Vec3::ZERO); 3];
        let eye = Vec3::new(0.0, 0.0, 1000.0);
        tree.visible(&mut out, eye, &everything_frustum());
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn farther_octants_come_first() {
        let mut tree = small_tree();
        // Fill one far corner and one near corner enough to force splits
        for i in 0..5 {
            let jitter = i as f32 * 0.5;
            assert!(tree.insert(mark(Vec3::new(-40.0 + jitter, -40.0, -40.0))));
            assert!(tree.insert(mark(Vec3::new(40.0 - jitter, 40.0, 40.0))));
        }
        let eye = Vec3::new(45.0, 45.0, 45.0);
        let mut out = Vec::new();
        tree.visible(&mut out, eye, &everything_frustum());
        assert_eq!(out.len(), 10);
        let first = Vec3::from_array(out[0].pos);
        let last = Vec3::from_array(out[9].pos);
        assert!(first.distance(eye) > last.distance(eye));
    }

    #[test]
    fn children_tile_the_parent() {
        let parent =
            Octant::leaf(Vec3::new(10.0, -20.0, 30.0), 8.0, Vec::new());
        for slot in 0..8 {
            let center = parent.child_center(slot);
            let offset = center - parent.center;
            assert_eq!(offset.abs(), Vec3::splat(4.0));
            // A point just inside the child maps back to the same slot
            assert_eq!(parent.child_slot(center), slot);
            let child = Octant::leaf(center, 4.0, Vec::new());
            assert!(child.contains(center + offset * 0.99));
            assert!(!child.contains(center + offset * 1.01));
        }
    }

    #[test]
    fn coincident_marks_stop_splitting() {
        let mut tree = small_tree();
        for _ in 0..50 {
            assert!(tree.insert(mark(Vec3::new(1.0, 2.0, 3.0))));
        }
        assert_eq!(tree.len(), 50);
    }

    #[test]
    fn zero_bucket_size_is_treated_as_one() {
        let mut tree = MarkOctree::new(&SceneOptions {
            bucket_size: 0,
            ..SceneOptions::default()
        });
        assert!(tree.insert(mark(Vec3::ONE)));
        assert!(tree.insert(mark(Vec3::NEG_ONE)));
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());
    }
}
