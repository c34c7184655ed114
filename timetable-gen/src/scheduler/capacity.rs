/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Weekly capacity check.
//!
//! One section can attend at most one class per (day, slot) cell, so a week
//! holds `days × slots` sessions. A curriculum needing more than that is cut
//! down to the largest prefix that fits:
//!
//! $$\text{kept} = \left\lfloor \frac{\text{days} \times \text{slots}}{\text{sessions per subject}} \right\rfloor$$
//!
//! | days × slots | sessions/subject | subjects | kept |
//! |---|---|---|---|
//! | 36 | 3 | 5 | 5 |
//! | 36 | 3 | 15 | 12 |
//! | 2 | 3 | 4 | 0 |

/// Split `subjects` into `(kept, dropped)` so that
/// `kept.len() × sessions_per_subject ≤ capacity`.
///
/// Order is preserved: the first subjects are kept. `sessions_per_subject`
/// of zero keeps everything.
pub fn truncate_to_capacity(
    mut subjects: Vec<String>,
    capacity: usize,
    sessions_per_subject: u32,
) -> (Vec<String>, Vec<String>) {
    let per = sessions_per_subject as usize;
    if per == 0 || subjects.len().saturating_mul(per) <= capacity {
        return (subjects, Vec::new());
    }
    let kept = capacity / per;
    let dropped = subjects.split_off(kept);
    (subjects, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("S{i}")).collect()
    }

    #[test]
    fn fitting_curriculum_is_untouched() {
        let (kept, dropped) = truncate_to_capacity(names(5), 36, 3);
        assert_eq!(kept.len(), 5);
        assert!(dropped.is_empty());
    }

    #[test]
    fn exact_fit_is_untouched() {
        let (kept, dropped) = truncate_to_capacity(names(12), 36, 3);
        assert_eq!(kept.len(), 12);
        assert!(dropped.is_empty());
    }

    #[test]
    fn oversized_curriculum_keeps_prefix() {
        let (kept, dropped) = truncate_to_capacity(names(15), 36, 3);
        assert_eq!(kept, names(12));
        assert_eq!(dropped, vec!["S12", "S13", "S14"]);
        assert!(kept.len() * 3 <= 36);
    }

    #[test]
    fn capacity_below_one_subject_keeps_nothing() {
        let (kept, dropped) = truncate_to_capacity(names(4), 2, 3);
        assert!(kept.is_empty());
        assert_eq!(dropped.len(), 4);
    }
}
