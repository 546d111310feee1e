use crate::fretboard::Fretboard;
use crate::pitch::Pitch;
use crate::position::{Fret, Position, Realization, OPEN_FRET};

/// Enumerate every realization of `targets` on the fretboard.
///
/// String-major recursion: each string in turn is either muted or assigned
/// one still-unassigned target pitch, ascending (which on a single string
/// means fret-ascending). Each occurrence of a duplicate target pitch must
/// occupy its own string; indistinguishable assignments are emitted once.
///
/// Unreachable pitches simply produce an empty result: absence, not an
/// error. Branches whose fretted span already exceeds `max_span` are pruned.
pub fn enumerate_realizations(fb: &Fretboard, targets: &[Pitch], max_span: u8) -> Vec<Realization> {
    if targets.is_empty() || targets.len() > fb.string_count() {
        return Vec::new();
    }
    let mut sorted: Vec<Pitch> = targets.to_vec();
    sorted.sort();

    let mut enumerator = Enumerator {
        fb,
        targets: sorted,
        max_span,
        used: vec![false; targets.len()],
        acc: Vec::with_capacity(fb.string_count()),
        out: Vec::new(),
    };
    enumerator.recurse(0, targets.len(), None);
    enumerator.out
}

struct Enumerator<'a> {
    fb: &'a Fretboard,
    targets: Vec<Pitch>,
    max_span: u8,
    used: Vec<bool>,
    acc: Vec<Position>,
    out: Vec<Realization>,
}

impl Enumerator<'_> {
    fn recurse(&mut self, string: usize, remaining: usize, fretted_range: Option<(Fret, Fret)>) {
        let n = self.fb.string_count();
        if string == n {
            if remaining == 0 {
                self.out.push(Realization::new(self.acc.clone()));
            }
            return;
        }

        let strings_left = n - string;
        if remaining > strings_left {
            return;
        }

        // Muted, unless every remaining string is needed for coverage.
        if remaining < strings_left {
            self.acc.push(Position::Muted { string });
            self.recurse(string + 1, remaining, fretted_range);
            self.acc.pop();
        }

        let open = self.fb.open_pitch(string);
        for i in 0..self.targets.len() {
            if self.used[i] {
                continue;
            }
            // Duplicate pitches are interchangeable; always take the first
            // unused occurrence so permuted assignments collapse.
            if i > 0 && self.targets[i] == self.targets[i - 1] && !self.used[i - 1] {
                continue;
            }
            let delta = self.targets[i].semitones_from(open);
            if delta < 0 || delta > self.fb.fret_count() as i32 {
                continue;
            }
            let fret = delta as Fret;

            let next_range = if fret > OPEN_FRET {
                let (lo, hi) = match fretted_range {
                    Some((lo, hi)) => (lo.min(fret), hi.max(fret)),
                    None => (fret, fret),
                };
                if hi - lo > self.max_span {
                    continue;
                }
                Some((lo, hi))
            } else {
                fretted_range
            };

            self.used[i] = true;
            self.acc.push(Position::Played {
                string,
                fret,
                pitch: self.targets[i],
            });
            self.recurse(string + 1, remaining - 1, next_range);
            self.acc.pop();
            self.used[i] = false;
        }
    }
}
