//! The emphasis post-pass (§4.4.4): a single deterministic sweep over a
//! leaf's top-level inline children that pairs up `*`/`_` delimiter runs
//! left to right, nearest-opener first, honoring CommonMark's "rule of 3"
//! and preferring strong (2 chars) over emphasis (1 char) whenever both
//! sides have enough left to spare.
//!
//! This intentionally does not implement delimiter reuse across multiple
//! pairings (a run fully commits to its first successful match); see
//! DESIGN.md for the scope note.

use super::arena::{InlineArena, InlineTag};

pub fn resolve_leaf(arena: &mut InlineArena, root: super::arena::InlineId) {
    let mut children = std::mem::take(arena.children_mut(root));
    resolve(arena, &mut children);
    *arena.children_mut(root) = children;
}

fn resolve(arena: &mut InlineArena, children: &mut Vec<super::arena::InlineId>) {
    let mut openers: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < children.len() {
        let id = children[i];
        let Some(delim) = arena.delimiter_info(id) else {
            i += 1;
            continue;
        };

        if delim.can_close {
            if let Some(stack_pos) = find_opener(arena, children, &openers, delim) {
                let opener_idx = openers[stack_pos];
                let opener_delim = arena.delimiter_info(children[opener_idx]).unwrap();
                let n = pair_strength(opener_delim.count, delim.count);

                let inner: Vec<_> = children.drain((opener_idx + 1)..i).collect();
                let closer_idx = opener_idx + 1; // shifted left by the drain

                let tag = if n == 2 { InlineTag::Strong } else { InlineTag::Emphasis };
                let wrap_id = arena.new_detached_container(tag, inner);

                let mut replacement = Vec::with_capacity(3);
                if arena.split_delimiter_leftover(children[opener_idx], n) {
                    replacement.push(children[opener_idx]);
                }
                replacement.push(wrap_id);
                if arena.split_delimiter_leftover(children[closer_idx], n) {
                    replacement.push(children[closer_idx]);
                }

                children.splice(opener_idx..=closer_idx, replacement.iter().copied());
                openers.truncate(stack_pos);
                i = opener_idx + replacement.len();
                continue;
            }
        }

        if delim.can_open {
            openers.push(i);
        }
        i += 1;
    }

    for &id in children.iter() {
        arena.degrade_delimiter_to_text(id);
    }

    // Nested emphasis created above is already fully resolved (its content
    // came from a slice that was itself scanned left-to-right before being
    // wrapped), so no recursive call is needed here.
}

fn pair_strength(opener_count: usize, closer_count: usize) -> usize {
    if opener_count >= 2 && closer_count >= 2 {
        2
    } else {
        1
    }
}

fn find_opener(
    arena: &InlineArena,
    children: &[super::arena::InlineId],
    openers: &[usize],
    closer: super::arena::DelimiterInfo,
) -> Option<usize> {
    for (stack_pos, &idx) in openers.iter().enumerate().rev() {
        let opener = arena.delimiter_info(children[idx]).unwrap();
        if opener.ch != closer.ch || !opener.can_open {
            continue;
        }
        let both_sided = (opener.can_open && opener.can_close) || (closer.can_open && closer.can_close);
        if both_sided && (opener.count + closer.count) % 3 == 0 && !(opener.count % 3 == 0 && closer.count % 3 == 0) {
            continue;
        }
        return Some(stack_pos);
    }
    None
}
