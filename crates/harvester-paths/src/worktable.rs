use harvester_core::Coord;

/// Per-cell search bookkeeping. One of these exists for every map cell
/// during a search call.
#[derive(Clone)]
pub(crate) struct Node {
    /// Finalized; never revisited or improved afterwards.
    pub(crate) closed: bool,
    /// Currently a member of the open set.
    pub(crate) in_open: bool,
    /// Position inside the open-set heap array. Only meaningful while
    /// `in_open` is set.
    pub(crate) open_idx: usize,
    /// Predecessor on the best known path; invalid for the start cell and
    /// for cells never reached.
    pub(crate) parent: Coord,
    pub(crate) g: f32,
    pub(crate) h: f32,
    pub(crate) f: f32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            closed: false,
            in_open: false,
            open_idx: 0,
            parent: Coord::INVALID,
            g: 0.0,
            h: 0.0,
            f: 0.0,
        }
    }
}

/// Work table for one search call: the flat per-cell node array plus the
/// open set, kept as a binary min-heap on `f` with back-links into the
/// node array so that improving an open cell re-heapifies in O(log n).
///
/// Allocated at the start of a call, dropped with the search instance.
pub(crate) struct WorkTable {
    width: usize,
    height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) open: Vec<usize>,
}

impl WorkTable {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            nodes: vec![Node::default(); width * height],
            open: Vec::new(),
        }
    }

    /// Flat index of `c`, or `None` when outside the map extent.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if c.x < 0 || c.y < 0 {
            return None;
        }
        let (x, y) = (c.x as usize, c.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Coord {
        Coord::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Discover `c` or improve its costs.
    ///
    /// Closed cells are left untouched, as are open cells whose current
    /// `f` is equal or better than the candidate. Out-of-range coordinates
    /// are ignored.
    pub(crate) fn relax(&mut self, c: Coord, g: f32, h: f32, parent: Coord) {
        let Some(i) = self.idx(c) else {
            return;
        };
        let f = g + h;
        let end = self.open.len();
        let n = &mut self.nodes[i];
        if n.closed {
            return;
        }
        if n.in_open {
            if f < n.f {
                n.g = g;
                n.h = h;
                n.f = f;
                n.parent = parent;
                let pos = n.open_idx;
                self.sift_up(pos);
            }
            return;
        }
        n.g = g;
        n.h = h;
        n.f = f;
        n.parent = parent;
        n.in_open = true;
        n.open_idx = end;
        self.open.push(i);
        self.sift_up(end);
    }

    /// Extract the open cell with the smallest `f`. The cell leaves the
    /// open set but is not yet closed.
    pub(crate) fn pop_best(&mut self) -> Option<usize> {
        let first = *self.open.first()?;
        self.nodes[first].in_open = false;
        let last = self.open.pop()?;
        if !self.open.is_empty() {
            self.open[0] = last;
            self.nodes[last].open_idx = 0;
            self.sift_down(0);
        }
        Some(first)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if self.nodes[self.open[p]].f <= self.nodes[self.open[i]].f {
                break;
            }
            self.swap_entries(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let l = 2 * i + 1;
            if l >= self.open.len() {
                break;
            }
            let r = l + 1;
            let mut smallest = l;
            if r < self.open.len() && self.nodes[self.open[r]].f < self.nodes[self.open[l]].f {
                smallest = r;
            }
            if self.nodes[self.open[i]].f <= self.nodes[self.open[smallest]].f {
                break;
            }
            self.swap_entries(i, smallest);
            i = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.open.swap(a, b);
        self.nodes[self.open[a]].open_idx = a;
        self.nodes[self.open[b]].open_idx = b;
    }
}
