//! The Todd–Coxeter coset enumeration engine.
//!
//! This is the heart of the crate (see the component budget in the system
//! overview). It implements the HLT ("Hulpke, Lindsay & Todd"-style)
//! strategy with scan-all: repeatedly define a new coset for the first live
//! row with an undefined transition, then scan every relation from every
//! live coset, draining the coincidence queue after each round.

use std::collections::VecDeque;

use crate::error::{PolytopeError, PolytopeResult};
use crate::group::word::{Generator, Word};

/// Default bound on the number of cosets before enumeration is considered
/// diverged. The concrete scenarios in this crate top out at 1200 cosets
/// (the 120-cell's edges); this leaves ample headroom while still catching
/// mispresented or infinite groups quickly.
pub const DEFAULT_MAX_COSETS: usize = 1 << 16;

/// The live, frozen result of a coset enumeration: a dense `coset ×
/// generator -> coset` table, each coset labelled with a shortest
/// representative word from coset `0`.
#[derive(Debug, Clone)]
pub struct CosetTable {
    num_cosets: usize,
    gen_count: usize,
    action: Vec<usize>,
    words: Vec<Word>,
}

impl Default for CosetTable {
    /// An empty table with no cosets and no generators, used by builders
    /// that don't perform a coset enumeration of their own (the dual
    /// builder works purely combinatorially on an already-built polytope).
    fn default() -> Self {
        Self {
            num_cosets: 0,
            gen_count: 0,
            action: Vec::new(),
            words: Vec::new(),
        }
    }
}

impl CosetTable {
    /// The number of live cosets, i.e. the index of the subgroup this table
    /// enumerates.
    pub fn num_cosets(&self) -> usize {
        self.num_cosets
    }

    /// `next(c, g)`: the coset reached from `c` by the generator `g`.
    pub fn next(&self, c: usize, g: Generator) -> usize {
        self.action[c * self.gen_count + g]
    }

    /// The shortest representative word for coset `c`, satisfying
    /// `move(0, word(c)) == c`.
    pub fn word(&self, c: usize) -> &Word {
        &self.words[c]
    }

    /// All shortest representative words, indexed by coset id.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Applies a word to a coset by following `next` for each letter,
    /// left to right. This is the "index move" of the Symmetry Action
    /// layer (see [`crate::group::action`]).
    pub fn apply(&self, c: usize, word: &Word) -> usize {
        word.iter().fold(c, |acc, g| self.next(acc, g))
    }
}

/// Enumerates the right cosets of the subgroup generated by
/// `subgroup_gens` inside the group presented by `⟨0..gen_count |
/// relations⟩`. `inverse[g]` must give the generator inverse to `g`
/// (`inverse[g] == g` for an involution).
pub fn enumerate(
    gen_count: usize,
    inverse: &[Generator],
    relations: &[Word],
    subgroup_gens: &[Word],
    max_cosets: usize,
) -> PolytopeResult<CosetTable> {
    let span = tracing::debug_span!(
        "enumerate_cosets",
        gen_count,
        relations = relations.len(),
        subgroup_gens = subgroup_gens.len()
    );
    let _enter = span.enter();

    let mut engine = Engine::new(gen_count, inverse.to_vec());
    let mut queue = VecDeque::new();

    for w in subgroup_gens {
        engine.scan_relation(0, w, &mut queue);
    }
    engine.coincidence_loop(&mut queue);

    loop {
        let target = (0..engine.table.len()).find_map(|c| {
            if engine.rep(c) == c {
                (0..gen_count)
                    .find(|&g| engine.table[c][g].is_none())
                    .map(|g| (c, g))
            } else {
                None
            }
        });

        let Some((c, g)) = target else {
            break;
        };

        engine.define(c, g);

        let live = engine.live_count();
        if live > max_cosets {
            tracing::warn!(max_cosets, live, "coset enumeration exceeded bound");
            return Err(PolytopeError::Diverged { max_cosets });
        }
        tracing::trace!(live, "defined coset");

        for rel in relations {
            let alive: Vec<usize> = (0..engine.table.len()).filter(|&x| engine.rep(x) == x).collect();
            for live_c in alive {
                engine.scan_relation(live_c, rel, &mut queue);
            }
        }
        engine.coincidence_loop(&mut queue);
    }

    Ok(engine.compact())
}

/// The mutable engine used only during enumeration; never exposed outside
/// this module. Its action table and union-find are released once
/// [`Engine::compact`] produces the frozen [`CosetTable`].
struct Engine {
    gen_count: usize,
    inverse: Vec<Generator>,
    table: Vec<Vec<Option<usize>>>,
    /// Union-find parent array: `redirect[c] == c` iff `c` is an alive root.
    redirect: Vec<usize>,
}

impl Engine {
    fn new(gen_count: usize, inverse: Vec<Generator>) -> Self {
        Self {
            gen_count,
            inverse,
            table: vec![vec![None; gen_count]],
            redirect: vec![0],
        }
    }

    /// Union-find `find`, with path compression. `coset 0` is always the
    /// identity coset and is never merged away (cosets merge *into* it, not
    /// out of it, since `merge` always keeps the smaller id).
    fn rep(&mut self, c: usize) -> usize {
        let mut root = c;
        while self.redirect[root] != root {
            root = self.redirect[root];
        }
        let mut cur = c;
        while self.redirect[cur] != root {
            let next = self.redirect[cur];
            self.redirect[cur] = root;
            cur = next;
        }
        root
    }

    fn live_count(&self) -> usize {
        self.redirect.iter().enumerate().filter(|&(i, &r)| i == r).count()
    }

    /// Creates a fresh coset `c'` with `A[c][g] = c'` and `A[c'][ḡ] = c`.
    fn define(&mut self, c: usize, g: Generator) -> usize {
        let new_id = self.table.len();
        self.table.push(vec![None; self.gen_count]);
        self.redirect.push(new_id);

        self.table[c][g] = Some(new_id);
        let gi = self.inverse[g];
        self.table[new_id][gi] = Some(c);
        new_id
    }

    /// Asserts `A[c][g] = result`. If an entry already exists and disagrees,
    /// the two results are queued as a coincidence rather than overwritten.
    fn deduce(&mut self, c: usize, g: Generator, result: usize, queue: &mut VecDeque<(usize, usize)>) {
        let c = self.rep(c);
        let result = self.rep(result);

        match self.table[c][g] {
            Some(existing) => {
                let existing = self.rep(existing);
                if existing != result {
                    queue.push_back((existing, result));
                }
            }
            None => {
                self.table[c][g] = Some(result);
                let gi = self.inverse[g];
                match self.table[result][gi] {
                    Some(existing) => {
                        let existing = self.rep(existing);
                        if existing != c {
                            queue.push_back((existing, c));
                        }
                    }
                    None => {
                        self.table[result][gi] = Some(c);
                    }
                }
            }
        }
    }

    /// Walks a relation word from both ends toward the middle, consuming
    /// defined transitions. Deduces a single undefined gap; otherwise stops
    /// (no lookahead coset is defined to bridge a larger gap — the outer
    /// driver will revisit this relation once more transitions are known).
    fn scan_relation(&mut self, c0: usize, word: &Word, queue: &mut VecDeque<(usize, usize)>) {
        let n = word.len();
        if n == 0 {
            return;
        }

        let mut left = self.rep(c0);
        let mut li = 0usize;
        let mut right = self.rep(c0);
        let mut ri = n;

        while li < ri {
            let g = word.0[li];
            match self.table[left][g] {
                Some(next) => {
                    left = self.rep(next);
                    li += 1;
                }
                None => break,
            }
        }
        while ri > li {
            let g = word.0[ri - 1];
            let gi = self.inverse[g];
            match self.table[right][gi] {
                Some(prev) => {
                    right = self.rep(prev);
                    ri -= 1;
                }
                None => break,
            }
        }

        if li == ri {
            if left != right {
                queue.push_back((left, right));
            }
        } else if li + 1 == ri {
            let g = word.0[li];
            self.deduce(left, g, right, queue);
        }
    }

    /// Drains the coincidence queue: for each pending `(a, b)` pair, merges
    /// the larger id into the smaller, copying over the dropped row's
    /// entries (and queuing any fresh conflicts this produces).
    fn coincidence_loop(&mut self, queue: &mut VecDeque<(usize, usize)>) {
        while let Some((a, b)) = queue.pop_front() {
            let a = self.rep(a);
            let b = self.rep(b);
            if a == b {
                continue;
            }
            let (keep, drop) = if a < b { (a, b) } else { (b, a) };
            self.redirect[drop] = keep;

            for g in 0..self.gen_count {
                if let Some(x) = self.table[drop][g] {
                    self.deduce(keep, g, x, queue);
                }
            }
        }
    }

    /// Renumbers the alive cosets `0..N` in ascending original-index order
    /// and reconstructs shortest representative words via a single BFS
    /// pass over the now-frozen action table.
    fn compact(mut self) -> CosetTable {
        let alive: Vec<usize> = (0..self.table.len()).filter(|&c| self.rep(c) == c).collect();
        let gen_count = self.gen_count;
        let mut compact_id = vec![usize::MAX; self.table.len()];
        for (new_id, &old_id) in alive.iter().enumerate() {
            compact_id[old_id] = new_id;
        }

        let n = alive.len();
        let mut action = vec![0usize; n * gen_count];
        for (new_id, &old_id) in alive.iter().enumerate() {
            for g in 0..gen_count {
                let raw = self.table[old_id][g].expect("coset table row incomplete after enumerate");
                let target = self.rep(raw);
                action[new_id * gen_count + g] = compact_id[target];
            }
        }

        let mut words: Vec<Option<Word>> = vec![None; n];
        words[0] = Some(Word::empty());
        let mut queue = VecDeque::new();
        queue.push_back(0usize);
        while let Some(c) = queue.pop_front() {
            for g in 0..gen_count {
                let next = action[c * gen_count + g];
                if words[next].is_none() {
                    let mut w = words[c].clone().expect("bfs visits parents first");
                    w.0.push(g);
                    words[next] = Some(w);
                    queue.push_back(next);
                }
            }
        }
        let words: Vec<Word> = words.into_iter().map(|w| w.expect("all cosets reachable from 0")).collect();

        CosetTable {
            num_cosets: n,
            gen_count,
            action,
            words,
        }
    }
}
