//! Catalogue of named transition tables.
//!
//! `+7` means next free workday, `-7` previous free workday.

use crate::rule::ObservedRule;
use hol_time::weekday::{FRI, MON, SAT, SUN, THU, TUE, WED};

const fn rule(entries: &[(u8, i8)]) -> ObservedRule {
    ObservedRule::table(entries)
}

// ── Single days ───────────────────────────────────────────────────────────────

/// Monday → next Tuesday.
pub const MON_TO_NEXT_TUE: ObservedRule = rule(&[(MON, 1)]);

/// Tuesday → previous Monday.
pub const TUE_TO_PREV_MON: ObservedRule = rule(&[(TUE, -1)]);
/// Tuesday → previous Friday.
pub const TUE_TO_PREV_FRI: ObservedRule = rule(&[(TUE, -4)]);

/// Wednesday → previous Monday.
pub const WED_TO_PREV_MON: ObservedRule = rule(&[(WED, -2)]);
/// Wednesday → next Friday.
pub const WED_TO_NEXT_FRI: ObservedRule = rule(&[(WED, 2)]);

/// Thursday → previous Monday.
pub const THU_TO_PREV_MON: ObservedRule = rule(&[(THU, -3)]);
/// Thursday → previous Wednesday.
pub const THU_TO_PREV_WED: ObservedRule = rule(&[(THU, -1)]);
/// Thursday → next Monday.
pub const THU_TO_NEXT_MON: ObservedRule = rule(&[(THU, 4)]);
/// Thursday → next Friday.
pub const THU_TO_NEXT_FRI: ObservedRule = rule(&[(THU, 1)]);

/// Friday → previous Wednesday.
pub const FRI_TO_PREV_WED: ObservedRule = rule(&[(FRI, -2)]);
/// Friday → previous Thursday.
pub const FRI_TO_PREV_THU: ObservedRule = rule(&[(FRI, -1)]);
/// Friday → next Monday.
pub const FRI_TO_NEXT_MON: ObservedRule = rule(&[(FRI, 3)]);
/// Friday → next Tuesday.
pub const FRI_TO_NEXT_TUE: ObservedRule = rule(&[(FRI, 4)]);
/// Friday → next Saturday.
pub const FRI_TO_NEXT_SAT: ObservedRule = rule(&[(FRI, 1)]);
/// Friday → next free workday.
pub const FRI_TO_NEXT_WORKDAY: ObservedRule = rule(&[(FRI, 7)]);

/// Saturday → previous Thursday.
pub const SAT_TO_PREV_THU: ObservedRule = rule(&[(SAT, -2)]);
/// Saturday → previous Friday.
pub const SAT_TO_PREV_FRI: ObservedRule = rule(&[(SAT, -1)]);
/// Saturday → previous free workday.
pub const SAT_TO_PREV_WORKDAY: ObservedRule = rule(&[(SAT, -7)]);
/// Saturday → next Monday.
pub const SAT_TO_NEXT_MON: ObservedRule = rule(&[(SAT, 2)]);
/// Saturday → next Tuesday.
pub const SAT_TO_NEXT_TUE: ObservedRule = rule(&[(SAT, 3)]);
/// Saturday → next Sunday.
pub const SAT_TO_NEXT_SUN: ObservedRule = rule(&[(SAT, 1)]);
/// Saturday → next free workday.
pub const SAT_TO_NEXT_WORKDAY: ObservedRule = rule(&[(SAT, 7)]);

/// Sunday → next Monday.
pub const SUN_TO_NEXT_MON: ObservedRule = rule(&[(SUN, 1)]);
/// Sunday → next Tuesday.
pub const SUN_TO_NEXT_TUE: ObservedRule = rule(&[(SUN, 2)]);
/// Sunday → next Wednesday.
pub const SUN_TO_NEXT_WED: ObservedRule = rule(&[(SUN, 3)]);
/// Sunday → next free workday.
pub const SUN_TO_NEXT_WORKDAY: ObservedRule = rule(&[(SUN, 7)]);

// ── Multiple days ─────────────────────────────────────────────────────────────

/// Every day except Monday → nearest Monday.
pub const ALL_TO_NEAREST_MON: ObservedRule =
    rule(&[(TUE, -1), (WED, -2), (THU, -3), (FRI, 3), (SAT, 2), (SUN, 1)]);
/// Like [`ALL_TO_NEAREST_MON`] but Thursday goes forward.
pub const ALL_TO_NEAREST_MON_LATAM: ObservedRule =
    rule(&[(TUE, -1), (WED, -2), (THU, 4), (FRI, 3), (SAT, 2), (SUN, 1)]);
/// Every day except Monday → next Monday.
pub const ALL_TO_NEXT_MON: ObservedRule =
    rule(&[(TUE, 6), (WED, 5), (THU, 4), (FRI, 3), (SAT, 2), (SUN, 1)]);
/// Every day except Sunday → next Sunday.
pub const ALL_TO_NEXT_SUN: ObservedRule =
    rule(&[(MON, 6), (TUE, 5), (WED, 4), (THU, 3), (FRI, 2), (SAT, 1)]);

/// Tuesday–Friday → nearest Monday.
pub const WORKDAY_TO_NEAREST_MON: ObservedRule = rule(&[(TUE, -1), (WED, -2), (THU, -3), (FRI, 3)]);
/// Tuesday–Friday → next Monday.
pub const WORKDAY_TO_NEXT_MON: ObservedRule = rule(&[(TUE, 6), (WED, 5), (THU, 4), (FRI, 3)]);
/// Monday–Friday → next free workday.
pub const WORKDAY_TO_NEXT_WORKDAY: ObservedRule =
    rule(&[(MON, 7), (TUE, 7), (WED, 7), (THU, 7), (FRI, 7)]);

/// Tuesday, Wednesday → previous Monday.
pub const TUE_WED_TO_PREV_MON: ObservedRule = rule(&[(TUE, -1), (WED, -2)]);
/// Tuesday–Thursday → previous Monday.
pub const TUE_WED_THU_TO_PREV_MON: ObservedRule = rule(&[(TUE, -1), (WED, -2), (THU, -3)]);

/// Wednesday, Thursday → next Friday.
pub const WED_THU_TO_NEXT_FRI: ObservedRule = rule(&[(WED, 2), (THU, 1)]);

/// Thursday, Friday → next Monday.
pub const THU_FRI_TO_NEXT_MON: ObservedRule = rule(&[(THU, 4), (FRI, 3)]);
/// Thursday, Friday → next free workday.
pub const THU_FRI_TO_NEXT_WORKDAY: ObservedRule = rule(&[(THU, 7), (FRI, 7)]);
/// Thursday, Friday, Sunday → next Monday.
pub const THU_FRI_SUN_TO_NEXT_MON: ObservedRule = rule(&[(THU, 4), (FRI, 3), (SUN, 1)]);

/// Friday, Saturday → next free workday.
pub const FRI_SAT_TO_NEXT_WORKDAY: ObservedRule = rule(&[(FRI, 7), (SAT, 7)]);
/// Friday, Sunday → next Monday.
pub const FRI_SUN_TO_NEXT_MON: ObservedRule = rule(&[(FRI, 3), (SUN, 1)]);
/// Friday → Saturday, Sunday → Monday.
pub const FRI_SUN_TO_NEXT_SAT_MON: ObservedRule = rule(&[(FRI, 1), (SUN, 1)]);

/// Saturday, Sunday → previous Friday.
pub const SAT_SUN_TO_PREV_FRI: ObservedRule = rule(&[(SAT, -1), (SUN, -2)]);
/// Saturday, Sunday → next Monday.
pub const SAT_SUN_TO_NEXT_MON: ObservedRule = rule(&[(SAT, 2), (SUN, 1)]);
/// Saturday, Sunday → next Tuesday.
pub const SAT_SUN_TO_NEXT_TUE: ObservedRule = rule(&[(SAT, 3), (SUN, 2)]);
/// Saturday, Sunday → next Wednesday.
pub const SAT_SUN_TO_NEXT_WED: ObservedRule = rule(&[(SAT, 4), (SUN, 3)]);
/// Saturday → Monday, Sunday → Tuesday.
pub const SAT_SUN_TO_NEXT_MON_TUE: ObservedRule = rule(&[(SAT, 2), (SUN, 2)]);
/// Saturday, Sunday → next free workday.
pub const SAT_SUN_TO_NEXT_WORKDAY: ObservedRule = rule(&[(SAT, 7), (SUN, 7)]);

/// Saturday → previous Friday, Sunday → next Monday (US federal style).
pub const SAT_TO_PREV_FRI_SUN_TO_NEXT_MON: ObservedRule = rule(&[(SAT, -1), (SUN, 1)]);

/// Every named rule, by the name used in policy files.
pub static CATALOGUE: &[(&str, ObservedRule)] = &[
    ("MON_TO_NEXT_TUE", MON_TO_NEXT_TUE),
    ("TUE_TO_PREV_MON", TUE_TO_PREV_MON),
    ("TUE_TO_PREV_FRI", TUE_TO_PREV_FRI),
    ("WED_TO_PREV_MON", WED_TO_PREV_MON),
    ("WED_TO_NEXT_FRI", WED_TO_NEXT_FRI),
    ("THU_TO_PREV_MON", THU_TO_PREV_MON),
    ("THU_TO_PREV_WED", THU_TO_PREV_WED),
    ("THU_TO_NEXT_MON", THU_TO_NEXT_MON),
    ("THU_TO_NEXT_FRI", THU_TO_NEXT_FRI),
    ("FRI_TO_PREV_WED", FRI_TO_PREV_WED),
    ("FRI_TO_PREV_THU", FRI_TO_PREV_THU),
    ("FRI_TO_NEXT_MON", FRI_TO_NEXT_MON),
    ("FRI_TO_NEXT_TUE", FRI_TO_NEXT_TUE),
    ("FRI_TO_NEXT_SAT", FRI_TO_NEXT_SAT),
    ("FRI_TO_NEXT_WORKDAY", FRI_TO_NEXT_WORKDAY),
    ("SAT_TO_PREV_THU", SAT_TO_PREV_THU),
    ("SAT_TO_PREV_FRI", SAT_TO_PREV_FRI),
    ("SAT_TO_PREV_WORKDAY", SAT_TO_PREV_WORKDAY),
    ("SAT_TO_NEXT_MON", SAT_TO_NEXT_MON),
    ("SAT_TO_NEXT_TUE", SAT_TO_NEXT_TUE),
    ("SAT_TO_NEXT_SUN", SAT_TO_NEXT_SUN),
    ("SAT_TO_NEXT_WORKDAY", SAT_TO_NEXT_WORKDAY),
    ("SUN_TO_NEXT_MON", SUN_TO_NEXT_MON),
    ("SUN_TO_NEXT_TUE", SUN_TO_NEXT_TUE),
    ("SUN_TO_NEXT_WED", SUN_TO_NEXT_WED),
    ("SUN_TO_NEXT_WORKDAY", SUN_TO_NEXT_WORKDAY),
    ("ALL_TO_NEAREST_MON", ALL_TO_NEAREST_MON),
    ("ALL_TO_NEAREST_MON_LATAM", ALL_TO_NEAREST_MON_LATAM),
    ("ALL_TO_NEXT_MON", ALL_TO_NEXT_MON),
    ("ALL_TO_NEXT_SUN", ALL_TO_NEXT_SUN),
    ("WORKDAY_TO_NEAREST_MON", WORKDAY_TO_NEAREST_MON),
    ("WORKDAY_TO_NEXT_MON", WORKDAY_TO_NEXT_MON),
    ("WORKDAY_TO_NEXT_WORKDAY", WORKDAY_TO_NEXT_WORKDAY),
    ("TUE_WED_TO_PREV_MON", TUE_WED_TO_PREV_MON),
    ("TUE_WED_THU_TO_PREV_MON", TUE_WED_THU_TO_PREV_MON),
    ("WED_THU_TO_NEXT_FRI", WED_THU_TO_NEXT_FRI),
    ("THU_FRI_TO_NEXT_MON", THU_FRI_TO_NEXT_MON),
    ("THU_FRI_TO_NEXT_WORKDAY", THU_FRI_TO_NEXT_WORKDAY),
    ("THU_FRI_SUN_TO_NEXT_MON", THU_FRI_SUN_TO_NEXT_MON),
    ("FRI_SAT_TO_NEXT_WORKDAY", FRI_SAT_TO_NEXT_WORKDAY),
    ("FRI_SUN_TO_NEXT_MON", FRI_SUN_TO_NEXT_MON),
    ("FRI_SUN_TO_NEXT_SAT_MON", FRI_SUN_TO_NEXT_SAT_MON),
    ("SAT_SUN_TO_PREV_FRI", SAT_SUN_TO_PREV_FRI),
    ("SAT_SUN_TO_NEXT_MON", SAT_SUN_TO_NEXT_MON),
    ("SAT_SUN_TO_NEXT_TUE", SAT_SUN_TO_NEXT_TUE),
    ("SAT_SUN_TO_NEXT_WED", SAT_SUN_TO_NEXT_WED),
    ("SAT_SUN_TO_NEXT_MON_TUE", SAT_SUN_TO_NEXT_MON_TUE),
    ("SAT_SUN_TO_NEXT_WORKDAY", SAT_SUN_TO_NEXT_WORKDAY),
    ("SAT_TO_PREV_FRI_SUN_TO_NEXT_MON", SAT_TO_PREV_FRI_SUN_TO_NEXT_MON),
];

/// Look up a named rule (case-insensitive).
pub fn named(name: &str) -> Option<ObservedRule> {
    let name = name.trim();
    CATALOGUE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, rule)| rule)
}
