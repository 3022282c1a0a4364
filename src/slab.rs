//! Ordered slab lookup
//!
//! Both incentive schemes map a metric (net sales count, productivity ratio)
//! onto contiguous slabs with fixed rates. A slab table is a slice of
//! `(threshold, label, rate)` entries sorted by descending threshold; the
//! first entry whose threshold the value meets wins, so ties and values
//! between thresholds fall into the lower-bound slab and any value above the
//! top threshold lands in the top slab.

/// One row of a slab table: the lower bound of the range, the policy-sheet
/// label for it, and the rate attached to it.
#[derive(Debug, Clone, Copy)]
pub struct Slab<T, R> {
    pub threshold: T,
    pub label: &'static str,
    pub rate: R,
}

/// Find the slab for `value` in a descending-threshold table.
///
/// Returns `None` when the value is below the lowest threshold, which the
/// calculators treat as ineligibility.
pub fn lookup<T, R>(slabs: &[Slab<T, R>], value: T) -> Option<&Slab<T, R>>
where
    T: PartialOrd + Copy,
{
    slabs.iter().find(|slab| value >= slab.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [Slab<u32, f64>; 3] = [
        Slab { threshold: 10, label: "10+", rate: 3.0 },
        Slab { threshold: 5, label: "5-9", rate: 2.0 },
        Slab { threshold: 2, label: "2-4", rate: 1.0 },
    ];

    #[test]
    fn test_lookup_matches_lower_bound_slab() {
        assert_eq!(lookup(&TABLE, 2).unwrap().label, "2-4");
        assert_eq!(lookup(&TABLE, 4).unwrap().label, "2-4");
        assert_eq!(lookup(&TABLE, 5).unwrap().label, "5-9");
        assert_eq!(lookup(&TABLE, 9).unwrap().label, "5-9");
    }

    #[test]
    fn test_lookup_caps_at_top_slab() {
        assert_eq!(lookup(&TABLE, 10).unwrap().label, "10+");
        assert_eq!(lookup(&TABLE, 1000).unwrap().label, "10+");
    }

    #[test]
    fn test_lookup_below_minimum_is_none() {
        assert!(lookup(&TABLE, 1).is_none());
        assert!(lookup(&TABLE, 0).is_none());
    }
}
